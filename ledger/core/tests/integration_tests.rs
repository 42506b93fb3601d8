//! Integration tests for the ledger
//!
//! These drive the [`Ledger`] purely through [`UserEvent`]s, the way a
//! surface does, and check the resulting registry, selection and projection.

use pretty_assertions::assert_eq;

use ledger_core::{
    EventOutcome, FriendId, Ledger, LedgerConfig, Panel, Payer, UserEvent, DEFAULT_AVATAR_URL,
};

fn seeded() -> Ledger {
    Ledger::new(LedgerConfig::default()).unwrap()
}

fn clark() -> FriendId {
    FriendId::new("118836")
}

fn sarah() -> FriendId {
    FriendId::new("933372")
}

fn anthony() -> FriendId {
    FriendId::new("499476")
}

fn balance(ledger: &Ledger, id: &FriendId) -> f64 {
    ledger.friends().get(id).unwrap().balance
}

fn split(ledger: Ledger, friend: FriendId, bill: &str, paid: &str, payer: Payer) -> Ledger {
    ledger
        .update(UserEvent::SelectFriend { friend_id: friend })
        .update(UserEvent::BillChanged {
            input: bill.to_string(),
        })
        .update(UserEvent::PaidByUserChanged {
            input: paid.to_string(),
        })
        .update(UserEvent::PayerChanged { payer })
        .update(UserEvent::SubmitSplitBill)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_user_pays_for_clark() {
    let ledger = split(seeded(), clark(), "100", "40", Payer::User);

    assert_eq!(balance(&ledger, &clark()), 53.0);
    assert_eq!(balance(&ledger, &sarah()), 20.0);
    assert_eq!(balance(&ledger, &anthony()), 0.0);
    assert_eq!(ledger.panel(), &Panel::Idle);
}

#[test]
fn test_sarah_pays() {
    let ledger = split(seeded(), sarah(), "50", "10", Payer::Friend);

    assert_eq!(balance(&ledger, &sarah()), 10.0);
    assert_eq!(balance(&ledger, &clark()), -7.0);
    assert_eq!(ledger.panel(), &Panel::Idle);
}

#[test]
fn test_add_friend_with_empty_name_aborts() {
    let mut ledger = seeded();
    ledger.handle_event(UserEvent::ToggleAddFriend);
    ledger.handle_event(UserEvent::AddFriendImageChanged {
        value: DEFAULT_AVATAR_URL.to_string(),
    });

    let outcome = ledger.handle_event(UserEvent::SubmitAddFriend);

    assert_eq!(outcome, EventOutcome::Rejected);
    assert_eq!(ledger.friends().len(), 3);
    assert!(ledger.selection().is_adding_friend());
}

#[test]
fn test_add_max() {
    let mut ledger = seeded();
    ledger.handle_event(UserEvent::ToggleAddFriend);
    ledger.handle_event(UserEvent::AddFriendNameChanged {
        value: "Max".to_string(),
    });
    ledger.handle_event(UserEvent::AddFriendImageChanged {
        value: "https://i.pravatar.cc/48".to_string(),
    });

    let outcome = ledger.handle_event(UserEvent::SubmitAddFriend);

    let EventOutcome::FriendAdded(id) = outcome else {
        panic!("expected a new friend, got {outcome:?}");
    };
    assert_eq!(ledger.friends().len(), 4);
    let max = ledger.friends().at(3).unwrap();
    assert_eq!(max.id, id);
    assert_eq!(max.name, "Max");
    assert_eq!(max.balance, 0.0);
    assert_eq!(max.image, format!("https://i.pravatar.cc/48?={id}"));
    assert!(!ledger.selection().is_adding_friend());
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_registry_grows_only_on_successful_adds() {
    let mut ledger = seeded();
    let names = ["Ada", "", "Grace", "", "", "Linus"];
    let mut expected = ledger.friends().len();

    for name in names {
        if !ledger.selection().is_adding_friend() {
            ledger.handle_event(UserEvent::ToggleAddFriend);
        }
        ledger.handle_event(UserEvent::AddFriendNameChanged {
            value: name.to_string(),
        });
        ledger.handle_event(UserEvent::SubmitAddFriend);

        if !name.is_empty() {
            expected += 1;
        }
        assert_eq!(ledger.friends().len(), expected);
    }
}

#[test]
fn test_select_twice_returns_to_idle() {
    let ledger = seeded()
        .update(UserEvent::SelectFriend {
            friend_id: anthony(),
        })
        .update(UserEvent::SelectFriend {
            friend_id: anthony(),
        });

    assert_eq!(ledger.panel(), &Panel::Idle);
}

#[test]
fn test_select_other_never_passes_through_idle() {
    let mut ledger = seeded();
    ledger.handle_event(UserEvent::SelectFriend { friend_id: clark() });

    for next in [sarah(), anthony(), clark(), sarah()] {
        ledger.handle_event(UserEvent::SelectFriend {
            friend_id: next.clone(),
        });
        assert_eq!(ledger.selection().selected(), Some(&next));
    }
}

#[test]
fn test_inverse_settlements_restore_balance() {
    // User pays 30 of a 50 bill: Sarah owes 20 more
    let ledger = split(seeded(), sarah(), "50", "30", Payer::User);
    assert_eq!(balance(&ledger, &sarah()), 40.0);

    // Sarah pays a bill where the user's share is 20: back where we started
    let ledger = split(ledger, sarah(), "20", "20", Payer::Friend);
    assert_eq!(balance(&ledger, &sarah()), 20.0);
}

#[test]
fn test_share_above_bill_is_clamped() {
    let mut ledger = seeded();
    ledger.handle_event(UserEvent::SelectFriend { friend_id: clark() });
    ledger.handle_event(UserEvent::BillChanged {
        input: "30".to_string(),
    });
    ledger.handle_event(UserEvent::PaidByUserChanged {
        input: "12".to_string(),
    });

    for attempt in ["31", "120", "30.01"] {
        let outcome = ledger.handle_event(UserEvent::PaidByUserChanged {
            input: attempt.to_string(),
        });
        assert_eq!(outcome, EventOutcome::Rejected);
        assert_eq!(ledger.split_bill_view().unwrap().paid_by_user, "12");
    }
}

#[test]
fn test_opening_add_friend_clears_selection() {
    let ledger = seeded()
        .update(UserEvent::SelectFriend { friend_id: clark() })
        .update(UserEvent::ToggleAddFriend);

    assert_eq!(ledger.selection().selected(), None);
    assert!(ledger.split_bill_view().is_none());
    assert!(ledger.friends_list().iter().all(|row| !row.selected));
}

#[test]
fn test_friends_list_projection_follows_balances() {
    let ledger = split(seeded(), anthony(), "10", "5", Payer::Friend);

    let lines: Vec<String> = ledger
        .friends_list()
        .iter()
        .map(|row| row.status_text(&ledger.config().currency_symbol))
        .collect();

    assert_eq!(
        lines,
        vec![
            "You owe Clark $7".to_string(),
            "Sarah owes you $20".to_string(),
            "You owe Anthony $5".to_string(),
        ]
    );
}
