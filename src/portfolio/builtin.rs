use super::{Experience, Portfolio, Profile, Project, Skills, Tool};

pub fn builtin_portfolio() -> Portfolio {
    Portfolio {
        owner: Profile {
            name: "곽은철".into(),
            role: "B2B AX Manager".into(),
            company: "GPTers".into(),
            bio: "AI와 함께 성장하는 것을 좋아하는 프로덕트 매니저입니다.".into(),
        },
        experiences: vec![
            experience(
                "2025.07 - Present",
                "B2B AX Manager",
                "GPTers",
                "B2B AI 솔루션 경험 관리 및 고객 성공 지원",
            ),
            experience(
                "2025.05 - 2025.07",
                "Marketing Campaign Operator",
                "Bizmatrixx",
                "마케팅 캠페인 자동화 및 운영",
            ),
            experience(
                "2023 - 2025",
                "Camp Leader & Program Planner",
                "MBC United Camp",
                "300명 대상 해외 청소년 교육 프로그램 기획 및 운영",
            ),
            experience(
                "2023",
                "AI Forum Planning Intern",
                "MTN",
                "AI 포럼 기획 및 운영 지원",
            ),
            experience(
                "2022 - 2023",
                "Data-driven Content Creator",
                "SKKU Admissions",
                "데이터 기반 입학전략설명회 자료 제작 (200장)",
            ),
        ],
        projects: vec![
            Project {
                id: "skt-ai-frontier".into(),
                title: "SKT AI Frontier 교육 프로그램".into(),
                category: "AI Education".into(),
                description: "대기업 임직원 대상 AI 리터러시 교육 프로그램 기획 및 운영".into(),
                year: "2025".into(),
                details: "SKT 그룹 임직원을 대상으로 한 AI 교육 프로그램을 설계하고 운영했습니다."
                    .into(),
            },
            Project {
                id: "skku-admissions".into(),
                title: "입학전략설명회 자료 제작".into(),
                category: "Data Visualization".into(),
                description: "데이터 기반 청중 맞춤형 발표자료 200장 제작".into(),
                year: "2022-2023".into(),
                details:
                    "성균관대학교 입학처에서 데이터 분석을 기반으로 한 전략적 발표 자료를 제작했습니다."
                        .into(),
            },
            Project {
                id: "marketing-automation".into(),
                title: "마케팅 캠페인 자동화".into(),
                category: "Marketing Tech".into(),
                description: "Samsung·LG 캠페인 자동화 시나리오 구축".into(),
                year: "2025".into(),
                details: "대기업 마케팅 캠페인을 자동화하여 운영 효율성을 크게 향상시켰습니다."
                    .into(),
            },
            Project {
                id: "overseas-camp".into(),
                title: "해외 청소년 교육 프로그램".into(),
                category: "Education".into(),
                description: "300명 대상 문화 교류 프로그램 기획 및 운영".into(),
                year: "2023-2025".into(),
                details:
                    "MBC에서 해외 청소년들을 위한 대규모 교육 및 문화 교류 프로그램을 운영했습니다."
                        .into(),
            },
        ],
        skills: Skills {
            ai_tools: vec![
                tool("Claude", "Content & Design"),
                tool("ChatGPT", "Content & Design"),
                tool("Gamma", "Content & Design"),
                tool("Figma", "Content & Design"),
                tool("Veo3", "Content & Design"),
                tool("n8n", "Automation"),
                tool("Lindy AI", "Automation"),
                tool("Cursor", "Automation"),
                tool("Notion AI", "Automation"),
                tool("Perplexity", "Research"),
                tool("NotebookLM", "Research"),
            ],
            expertise: vec![
                "AI 교육 프로그램 기획".into(),
                "데이터 기반 의사결정".into(),
                "마케팅 자동화".into(),
                "프로그램 기획 및 운영".into(),
                "B2B 고객 경험 관리".into(),
            ],
        },
    }
}

fn experience(period: &str, role: &str, company: &str, description: &str) -> Experience {
    Experience {
        period: period.into(),
        role: role.into(),
        company: company.into(),
        description: description.into(),
    }
}

fn tool(name: &str, category: &str) -> Tool {
    Tool {
        name: name.into(),
        category: category.into(),
    }
}
