/// Reply used when no rule matches, or when a matched rule's data is missing.
pub const DEFAULT_REPLY: &str = "흥미로운 질문이네요! 다만 제가 답변할 수 있는 내용이 제한적입니다.\n\n\
다음과 같은 주제로 질문해주시면 더 자세히 답변드릴 수 있습니다:\n\n\
• 프로젝트 경험\n\
• 경력 사항\n\
• 사용하는 AI 도구\n\
• 전문 분야\n\
• 연락 방법\n\n\
더 궁금하신 점이 있으시면 편하게 물어보세요!";

pub fn no_match_response() -> String {
    DEFAULT_REPLY.to_string()
}
