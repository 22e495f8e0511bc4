use folio::chat::responder::{ResponseEngine, SUGGESTED_QUESTIONS};
use folio::chat::{ChatSession, Role, WELCOME_MESSAGE};
use folio::generate_response;

use crate::support::portfolio::portfolio_without;

#[test]
fn transcript_alternates_user_and_assistant() {
    let mut session = ChatSession::default();
    session.send("  hello  ").expect("reply expected");
    session.send("경력").expect("reply expected");

    let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::Assistant,
            Role::User,
            Role::Assistant,
            Role::User,
            Role::Assistant
        ]
    );
    assert_eq!(session.messages()[0].content, WELCOME_MESSAGE);
    assert_eq!(session.messages()[1].content, "hello");
    assert_eq!(session.messages()[4].content, generate_response("경력"));
}

#[test]
fn earlier_turns_do_not_change_replies() {
    let mut session = ChatSession::default();
    session.send("SKT");
    let after_history = session.send("zzz123").unwrap().content.clone();
    assert_eq!(after_history, generate_response("zzz123"));
}

#[test]
fn selecting_a_suggestion_matches_typing_it() {
    let mut typed = ChatSession::default();
    let mut selected = ChatSession::default();
    let typed_reply = typed.send(SUGGESTED_QUESTIONS[2]).unwrap().content.clone();
    let selected_reply = selected.select_suggestion(2).unwrap().content.clone();
    assert_eq!(typed_reply, selected_reply);
    assert!(selected.suggested_questions().is_empty());
}

#[test]
fn session_uses_the_engine_it_was_given() {
    let portfolio = portfolio_without(&["marketing-automation"]);
    let mut session = ChatSession::new(ResponseEngine::new(&portfolio));
    let reply = session.send("마케팅").unwrap();
    assert_eq!(reply.content, folio::chat::responder::DEFAULT_REPLY);
}

#[test]
fn message_ids_are_unique() {
    let mut session = ChatSession::default();
    session.send("안녕");
    let ids: std::collections::HashSet<_> = session.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), session.messages().len());
}
