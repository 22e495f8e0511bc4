use folio::chat::responder::{ResponseEngine, DEFAULT_REPLY, SUGGESTED_QUESTIONS};
use folio::{generate_response, Portfolio, Topic};

use crate::support::portfolio::{occurrences, portfolio_without, project_titles};

const WELCOME_REPLY: &str = "안녕하세요! 👋 곽은철의 포트폴리오에 오신 것을 환영합니다.\n\n\
저는 AI 기반 포트폴리오 어시스턴트입니다. 다음과 같은 질문을 하실 수 있어요:\n\n\
• \"어떤 프로젝트를 했어?\"\n\
• \"경력이 어떻게 돼?\"\n\
• \"어떤 기술을 사용해?\"\n\
• \"연락처가 어떻게 돼?\"\n\n\
궁금하신 것을 편하게 물어보세요!";

#[test]
fn greetings_return_the_welcome_template() {
    for input in ["안녕", "hello", "HELLO there", "반가워요"] {
        assert_eq!(generate_response(input), WELCOME_REPLY, "input: {input}");
    }
}

#[test]
fn project_question_lists_every_project_once_in_order() {
    let reply = generate_response("어떤 프로젝트를 했어?");
    let portfolio = Portfolio::builtin();
    let mut last_position = 0;
    for title in project_titles(portfolio) {
        let marker = format!("**{title}**");
        assert_eq!(occurrences(&reply, &marker), 1, "{title} in {reply}");
        let position = reply.find(&marker).unwrap();
        assert!(position > last_position, "{title} out of order");
        last_position = position;
    }
    assert!(reply.ends_with("더 자세한 내용이 궁금하시면 특정 프로젝트에 대해 물어보세요!"));
}

#[test]
fn earlier_rule_wins_on_overlapping_keywords() {
    let engine = ResponseEngine::builtin();
    assert_eq!(engine.classify("AI 프로젝트 도구"), Some(Topic::Projects));
    assert_eq!(
        generate_response("AI 프로젝트 도구"),
        generate_response("어떤 프로젝트를 했어?")
    );
    // `sk` (rule 4) shadows `skku` (rule 10).
    assert_eq!(engine.classify("SKKU 입학"), Some(Topic::SktAiFrontier));
    // `일` inside 이메일 routes to career before contact.
    assert_eq!(engine.classify("이메일 알려줘"), Some(Topic::Career));
    // `hi` inside `which`.
    assert_eq!(engine.classify("which tools"), Some(Topic::Greeting));
}

#[test]
fn unmatched_and_empty_input_get_the_default_reply() {
    for input in ["", "   ", "zzz123", "Привет"] {
        assert_eq!(generate_response(input), DEFAULT_REPLY, "input: {input:?}");
    }
    assert!(DEFAULT_REPLY.starts_with("흥미로운 질문이네요!"));
    assert!(DEFAULT_REPLY.contains("• 연락 방법\n\n"));
}

#[test]
fn suggested_questions_are_deterministic() {
    let engine = ResponseEngine::builtin();
    let topics: Vec<Option<Topic>> = SUGGESTED_QUESTIONS
        .iter()
        .map(|question| engine.classify(question))
        .collect();
    assert_eq!(
        topics,
        vec![
            Some(Topic::Projects),
            Some(Topic::Career),
            Some(Topic::Tools),
            Some(Topic::Career),
        ]
    );
    for question in SUGGESTED_QUESTIONS {
        let first = generate_response(question);
        let second = generate_response(question);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}

#[test]
fn career_lists_experiences_in_stored_order() {
    let reply = generate_response("경력이 어떻게 되나요?");
    assert!(reply.starts_with("제 경력을 소개해드릴게요:\n\n**GPTers** - B2B AX Manager\n2025.07 - Present\n"));
    let positions: Vec<usize> = ["GPTers", "Bizmatrixx", "MBC United Camp", "MTN", "SKKU Admissions"]
        .iter()
        .map(|company| reply.find(&format!("**{company}**")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn current_activity_reads_most_recent_experience() {
    let reply = ResponseEngine::builtin().reply("요즘 뭐 해?");
    assert_eq!(reply.topic, Some(Topic::CurrentRole));
    assert!(reply
        .text
        .starts_with("현재 **GPTers**에서 **B2B AX Manager**로 일하고 있습니다.\n\nB2B AI 솔루션 경험 관리 및 고객 성공 지원\n\n"));
}

#[test]
fn named_project_rules_return_project_details() {
    let engine = ResponseEngine::builtin();

    let skt = engine.reply("SKT 교육");
    assert_eq!(skt.topic, Some(Topic::SktAiFrontier));
    assert!(skt.text.starts_with(
        "**SKT AI Frontier 교육 프로그램**\n\nSKT 그룹 임직원을 대상으로 한 AI 교육 프로그램을 설계하고 운영했습니다.\n\n"
    ));

    let marketing = engine.reply("삼성 캠페인");
    assert_eq!(marketing.topic, Some(Topic::MarketingAutomation));
    assert!(marketing.text.starts_with("**마케팅 캠페인 자동화**\n\n"));

    let data = engine.reply("데이터 시각화");
    assert_eq!(data.topic, Some(Topic::DataVisualization));
    assert!(data.text.starts_with("**입학전략설명회 자료 제작**\n\n"));
    assert!(data.text.ends_with("설득력 있는 발표 자료를 제작했습니다."));
}

#[test]
fn tools_expertise_and_contact_rules() {
    let engine = ResponseEngine::builtin();

    let tools = engine.reply("claude 써봤어?");
    assert_eq!(tools.topic, Some(Topic::Tools));
    assert!(tools.text.contains("**Research**\nPerplexity, NotebookLM"));

    let expertise = engine.reply("강점이 뭐야?");
    assert_eq!(expertise.topic, Some(Topic::Expertise));
    assert!(expertise.text.contains("• AI 교육 프로그램 기획\n• 데이터 기반 의사결정\n"));

    let contact = engine.reply("contact please");
    assert_eq!(contact.topic, Some(Topic::Contact));
    assert!(contact.text.starts_with("연락주셔서 감사합니다! 📧"));
}

#[test]
fn missing_named_project_falls_back_to_default() {
    let portfolio = portfolio_without(&["skt-ai-frontier", "skku-admissions"]);
    let engine = ResponseEngine::new(&portfolio);

    assert_eq!(engine.classify("SKT"), Some(Topic::SktAiFrontier));
    let reply = engine.reply("SKT");
    assert_eq!(reply.topic, None);
    assert_eq!(reply.text, DEFAULT_REPLY);
    assert_eq!(engine.respond("데이터 시각화"), DEFAULT_REPLY);
    // Unaffected rules still use the reduced dataset.
    assert_eq!(occurrences(&engine.respond("프로젝트"), "**"), 4);
}
