#![allow(clippy::unwrap_used)]
//! Behavior of a chat session driven by a manual scheduler.
//!
//! Every tick is delivered by hand, so the log can be inspected between
//! any two characters of the reply.

use std::time::Duration;

use buddy_chat::chat::{
    AnimatorState, ChatController, ChatMessage, NullView, Persona, RecordingView,
};
use buddy_chat::scheduler::ManualScheduler;

const REPLY: &str = "At the moment we are under maintenance...";

fn persona() -> Persona {
    Persona {
        name: "Purple Pete".to_string(),
        user_name: "You".to_string(),
        reply: REPLY.to_string(),
        interval: Duration::from_millis(100),
        ..Persona::default()
    }
}

fn session() -> (ChatController<ManualScheduler, NullView>, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    (
        ChatController::new(persona(), scheduler.clone(), NullView),
        scheduler,
    )
}

fn tick<V: buddy_chat::chat::ChatView>(
    controller: &mut ChatController<ManualScheduler, V>,
    scheduler: &ManualScheduler,
    times: usize,
) {
    for _ in 0..times {
        scheduler.fire();
        controller.pump();
    }
}

fn texts_from<'a>(messages: &'a [ChatMessage], sender: &str) -> Vec<&'a str> {
    messages
        .iter()
        .filter(|m| m.is_from(sender))
        .map(ChatMessage::text)
        .collect()
}

#[test]
fn test_send_then_full_animation_yields_one_final_reply() {
    let (mut controller, scheduler) = session();

    assert!(controller.send_message("hello there"));
    tick(&mut controller, &scheduler, REPLY.chars().count());

    let messages = controller.log().messages();
    // greeting, user message, final reply
    assert_eq!(messages.len(), 3);
    assert_eq!(texts_from(messages, "You"), vec!["hello there"]);
    assert_eq!(messages[2].sender(), "Purple Pete");
    assert_eq!(messages[2].text(), REPLY);
    assert!(!controller.presentation().assistant_active);
}

#[test]
fn test_whitespace_input_changes_nothing() {
    let (mut controller, scheduler) = session();

    for input in ["", " ", "\t\n  "] {
        assert!(!controller.send_message(input));
    }

    assert_eq!(controller.log().len(), 1);
    assert_eq!(controller.animator().state(), AnimatorState::Idle);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_at_most_one_assistant_partial_at_tail() {
    let (mut controller, scheduler) = session();
    controller.send_message("hi");

    for revealed in 1..=5 {
        tick(&mut controller, &scheduler, 1);

        let messages = controller.log().messages();
        assert_eq!(messages.len(), 3);
        let tail = controller.log().tail().unwrap();
        assert_eq!(tail.sender(), "Purple Pete");
        assert_eq!(tail.text().chars().count(), revealed);
        assert!(REPLY.starts_with(tail.text()));
        assert_eq!(scheduler.pending(), 1);
    }
}

#[test]
fn test_extra_ticks_after_completion_do_not_mutate_log() {
    let (mut controller, scheduler) = session();
    controller.send_message("hi");

    let n = REPLY.chars().count();
    tick(&mut controller, &scheduler, n);

    assert_eq!(controller.animator().revealed_count(), n);
    assert_eq!(controller.animator().state(), AnimatorState::Idle);
    assert_eq!(scheduler.pending(), 0);
    let before: Vec<ChatMessage> = controller.log().messages().to_vec();

    tick(&mut controller, &scheduler, 5);

    assert_eq!(controller.log().messages(), before.as_slice());
    assert_eq!(controller.log().tail().unwrap().text(), REPLY);
}

#[test]
fn test_new_message_restarts_animation_from_first_character() {
    let (mut controller, scheduler) = session();

    controller.send_message("hi");
    tick(&mut controller, &scheduler, 3);
    assert_eq!(controller.log().tail().unwrap().text(), "At ");

    controller.send_message("there");
    assert_eq!(scheduler.pending(), 1);
    tick(&mut controller, &scheduler, 1);

    let messages = controller.log().messages();
    assert_eq!(texts_from(messages, "You"), vec!["hi", "there"]);
    assert_eq!(controller.log().tail().unwrap().text(), "A");

    // the interrupted partial stays where it was and never grows again
    let frozen: Vec<&str> = texts_from(messages, "Purple Pete");
    assert_eq!(frozen.len(), 3);
    assert_eq!(frozen[1], "At ");

    tick(&mut controller, &scheduler, REPLY.chars().count());
    let messages = controller.log().messages();
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[2].text(), "At ");
    assert_eq!(messages[4].text(), REPLY);
}

#[test]
fn test_ticks_queued_before_restart_are_discarded() {
    let (mut controller, scheduler) = session();
    controller.send_message("hi");

    // deliver a tick to the queue but do not apply it yet
    scheduler.fire();
    controller.send_message("there");

    assert_eq!(controller.pump(), 0);
    assert_eq!(controller.log().tail().unwrap().text(), "there");
    assert_eq!(controller.animator().revealed_count(), 0);
}

#[test]
fn test_view_is_rendered_on_every_tick() {
    let scheduler = ManualScheduler::new();
    let mut controller =
        ChatController::new(persona(), scheduler.clone(), RecordingView::default());

    controller.send_message("hi");
    let renders_after_send = controller.view().renders;
    tick(&mut controller, &scheduler, 4);

    // one render per tick
    assert_eq!(controller.view().renders, renders_after_send + 4);
    let tails: Vec<String> = controller
        .view()
        .tails
        .iter()
        .skip(renders_after_send)
        .map(|t| t.clone().unwrap())
        .collect();
    assert_eq!(tails, vec!["A", "At", "At ", "At t"]);
    assert!(
        controller
            .view()
            .last_presentation
            .as_ref()
            .unwrap()
            .assistant_active
    );
}

#[tokio::test(start_paused = true)]
async fn test_tokio_scheduler_types_out_reply() {
    use buddy_chat::scheduler::TokioScheduler;

    let persona = Persona {
        reply: "Hey".to_string(),
        interval: Duration::from_millis(50),
        ..Persona::default()
    };
    let mut controller = ChatController::new(persona, TokioScheduler, NullView);

    controller.send_message("hi");
    while controller.is_animating() {
        let run = controller.next_tick().await.unwrap();
        controller.handle_tick(run);
    }

    assert_eq!(controller.log().tail().unwrap().text(), "Hey");
    assert!(!controller.presentation().assistant_active);
}
