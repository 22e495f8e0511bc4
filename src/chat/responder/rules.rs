//! Ordered keyword rules for the portfolio assistant.
//!
//! Keyword sets overlap, so the order of [`RULES`] decides ambiguous inputs:
//! the first rule with any keyword contained in the lowercased message wins.
//! Matching is plain substring search, so `hi` also fires inside `this` and
//! `일` inside `이메일`.

use super::templates;
use crate::portfolio::Portfolio;
use serde::Serialize;

pub const SKT_AI_FRONTIER_ID: &str = "skt-ai-frontier";
pub const MARKETING_AUTOMATION_ID: &str = "marketing-automation";
pub const SKKU_ADMISSIONS_ID: &str = "skku-admissions";

/// What a matched rule answers about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greeting,
    Projects,
    Career,
    SktAiFrontier,
    MarketingAutomation,
    Tools,
    Expertise,
    CurrentRole,
    Contact,
    DataVisualization,
}

/// Renders a reply from the dataset. `None` means the data the rule needs is
/// missing and the caller must fall back.
pub type RenderFn = fn(&Portfolio) -> Option<String>;

pub struct Rule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    render: RenderFn,
}

impl Rule {
    /// `lowercased` must already be lowercased.
    pub fn matches(&self, lowercased: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowercased.contains(keyword))
    }

    pub fn render(&self, portfolio: &Portfolio) -> Option<String> {
        (self.render)(portfolio)
    }
}

pub static RULES: &[Rule] = &[
    Rule {
        topic: Topic::Greeting,
        keywords: &["안녕", "hi", "hello", "반가워", "처음"],
        render: templates::greeting,
    },
    Rule {
        topic: Topic::Projects,
        keywords: &["프로젝트", "작업", "포트폴리오", "만든", "작품"],
        render: templates::projects,
    },
    Rule {
        topic: Topic::Career,
        keywords: &["경력", "회사", "일", "직장", "근무", "경험", "커리어"],
        render: templates::career,
    },
    Rule {
        topic: Topic::SktAiFrontier,
        keywords: &["skt", "에스케이", "sk", "ai frontier", "프론티어", "교육"],
        render: templates::skt_ai_frontier,
    },
    Rule {
        topic: Topic::MarketingAutomation,
        keywords: &["마케팅", "캠페인", "자동화", "samsung", "lg", "삼성", "엘지"],
        render: templates::marketing_automation,
    },
    Rule {
        topic: Topic::Tools,
        keywords: &[
            "기술", "스킬", "도구", "tool", "스택", "사용", "능력", "ai", "claude", "gpt",
        ],
        render: templates::tools,
    },
    Rule {
        topic: Topic::Expertise,
        keywords: &["전문", "강점", "잘", "특기", "expertise"],
        render: templates::expertise,
    },
    Rule {
        topic: Topic::CurrentRole,
        keywords: &["지금", "현재", "요즘", "최근", "하는 일"],
        render: templates::current_role,
    },
    Rule {
        topic: Topic::Contact,
        keywords: &["연락", "이메일", "email", "contact", "메일", "컨택"],
        render: templates::contact,
    },
    Rule {
        topic: Topic::DataVisualization,
        keywords: &["데이터", "분석", "시각화", "입학", "성균관", "skku"],
        render: templates::data_visualization,
    },
];

/// First rule matching `lowercased`, in precedence order.
pub fn first_match(lowercased: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matches(lowercased))
}
