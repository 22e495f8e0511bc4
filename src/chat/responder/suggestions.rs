/// Quick-reply questions offered before the visitor has said anything.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "어떤 프로젝트를 진행했나요?",
    "현재 어떤 일을 하고 계신가요?",
    "어떤 AI 도구를 사용하시나요?",
    "경력이 어떻게 되나요?",
];

/// Suggestions are only offered while the transcript holds just the welcome
/// message.
pub fn should_offer(message_count: usize) -> bool {
    message_count == 1
}
