//! Reply bodies for each rule. `**text**` marks emphasis for the chat surface.

use super::rules::{MARKETING_AUTOMATION_ID, SKKU_ADMISSIONS_ID, SKT_AI_FRONTIER_ID};
use crate::portfolio::{Portfolio, Project};

pub fn greeting(portfolio: &Portfolio) -> Option<String> {
    Some(format!(
        "안녕하세요! 👋 {}의 포트폴리오에 오신 것을 환영합니다.\n\n\
         저는 AI 기반 포트폴리오 어시스턴트입니다. 다음과 같은 질문을 하실 수 있어요:\n\n\
         • \"어떤 프로젝트를 했어?\"\n\
         • \"경력이 어떻게 돼?\"\n\
         • \"어떤 기술을 사용해?\"\n\
         • \"연락처가 어떻게 돼?\"\n\n\
         궁금하신 것을 편하게 물어보세요!",
        portfolio.owner.name
    ))
}

pub fn projects(portfolio: &Portfolio) -> Option<String> {
    let listing = portfolio
        .projects
        .iter()
        .map(|project| {
            format!(
                "\n**{}** ({})\n{}",
                project.title, project.year, project.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!(
        "제가 진행한 주요 프로젝트들을 소개해드릴게요:\n{listing}\n\n\
         더 자세한 내용이 궁금하시면 특정 프로젝트에 대해 물어보세요!"
    ))
}

pub fn career(portfolio: &Portfolio) -> Option<String> {
    let listing = portfolio
        .experiences
        .iter()
        .map(|experience| {
            format!(
                "\n**{}** - {}\n{}\n{}",
                experience.company, experience.role, experience.period, experience.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("제 경력을 소개해드릴게요:\n{listing}"))
}

pub fn skt_ai_frontier(portfolio: &Portfolio) -> Option<String> {
    project_detail(
        portfolio.project(SKT_AI_FRONTIER_ID)?,
        "이 프로젝트는 대기업 임직원들의 AI 리터러시를 높이기 위한 교육 프로그램으로, \
         실무에 바로 적용 가능한 AI 도구 사용법과 활용 사례를 중심으로 진행되었습니다.",
    )
}

pub fn marketing_automation(portfolio: &Portfolio) -> Option<String> {
    project_detail(
        portfolio.project(MARKETING_AUTOMATION_ID)?,
        "Samsung과 LG의 마케팅 캠페인 자동화 시나리오를 구축하여 \
         반복 작업을 줄이고 캠페인 효율성을 높였습니다.",
    )
}

pub fn data_visualization(portfolio: &Portfolio) -> Option<String> {
    project_detail(
        portfolio.project(SKKU_ADMISSIONS_ID)?,
        "청중별 맞춤형 데이터 분석과 시각화를 통해 설득력 있는 발표 자료를 제작했습니다.",
    )
}

fn project_detail(project: &Project, closing: &str) -> Option<String> {
    Some(format!(
        "**{}**\n\n{}\n\n{}",
        project.title, project.details, closing
    ))
}

pub fn tools(portfolio: &Portfolio) -> Option<String> {
    let grouped = portfolio
        .skills
        .tools_by_category()
        .into_iter()
        .map(|group| format!("**{}**\n{}", group.category, group.tools.join(", ")))
        .collect::<Vec<_>>()
        .join("\n\n");
    Some(format!(
        "제가 주로 사용하는 AI 도구들입니다:\n\n{grouped}\n\n\
         이 도구들을 활용하여 콘텐츠 제작, 자동화, 리서치 등의 작업을 효율적으로 수행합니다."
    ))
}

pub fn expertise(portfolio: &Portfolio) -> Option<String> {
    let bullets = portfolio
        .skills
        .expertise
        .iter()
        .map(|entry| format!("• {entry}"))
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!(
        "제 전문 분야는 다음과 같습니다:\n\n{bullets}\n\n\
         AI를 활용한 프로세스 자동화와 데이터 기반 의사결정에 특히 강점이 있습니다."
    ))
}

pub fn current_role(portfolio: &Portfolio) -> Option<String> {
    let current = portfolio.current_experience()?;
    Some(format!(
        "현재 **{}**에서 **{}**로 일하고 있습니다.\n\n{}\n\n\
         B2B AI 솔루션의 고객 경험을 개선하고, 고객이 AI를 효과적으로 활용할 수 있도록 \
         지원하는 역할을 하고 있습니다.",
        current.company, current.role, current.description
    ))
}

pub fn contact(_portfolio: &Portfolio) -> Option<String> {
    Some(
        "연락주셔서 감사합니다! 📧\n\n\
         이메일이나 LinkedIn을 통해 연락주시면 빠르게 답변드리겠습니다.\n\n\
         우측 상단의 Contact 버튼을 클릭하시면 연락처 정보를 확인하실 수 있습니다."
            .to_string(),
    )
}
