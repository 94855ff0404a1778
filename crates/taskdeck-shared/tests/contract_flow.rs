use taskdeck_shared::draft::{approval_ok, email_prefill, event_prefill};
use taskdeck_shared::query::TaskQuery;
use taskdeck_shared::render::{pill_class, split_tags, tally};
use taskdeck_shared::suite::{cost_display, token_totals, vm_summary};
use taskdeck_shared::{MetricsSnapshot, TasksPage};

#[test]
fn task_page_render_pipeline() {
    let payload = r#"{
        "items": [
            {
                "id": "t-1",
                "title": "Reconcile payroll",
                "status": "In-Progress",
                "due_date": "2024-05-01",
                "priority": "1",
                "tags": "payroll, finance ,urgent",
                "next_action": "Compare against bank export"
            },
            {
                "id": "t-2",
                "status": "Completed",
                "notes": "done last week"
            },
            {
                "id": "t-3",
                "title": "Order supplies"
            }
        ]
    }"#;

    let page: TasksPage = serde_json::from_str(payload).expect("tasks page");
    assert_eq!(page.items.len(), 3);

    let counts = tally(&page.items);
    assert_eq!(counts.total, 3);
    assert_eq!(counts.done, 1);
    assert_eq!(counts.open, 2);

    let first = &page.items[0];
    assert_eq!(pill_class(&first.status), "pill yellow");
    assert_eq!(
        split_tags(&first.tags),
        vec!["payroll", "finance", "urgent"]
    );

    // Missing JSON keys default to empty display text.
    let second = &page.items[1];
    assert!(second.title.is_empty());
    assert_eq!(pill_class(&second.status), "pill green");
    let third = &page.items[2];
    assert_eq!(pill_class(&third.status), "pill");
}

#[test]
fn draft_flow_from_task_to_commit_payload() {
    let page: TasksPage = serde_json::from_str(
        r#"{"items": [{
            "id": "t-9",
            "title": "Renew lease",
            "due_date": "2024-05-01",
            "next_action": "Email landlord"
        }]}"#,
    )
    .expect("tasks page");
    let task = &page.items[0];

    let email = email_prefill(task);
    assert_eq!(email.subject, "Follow-up: Renew lease");
    assert_eq!(
        email.body,
        "Renew lease\n\nEmail landlord\n\nDue: 2024-05-01"
    );

    let event = event_prefill(task);
    assert_eq!(event.start, "2024-05-01T09:00");
    assert_eq!(event.end, "2024-05-01T09:30");

    // Preview payloads never carry an approval.
    let preview = serde_json::to_value(&email).expect("encode preview");
    assert_eq!(preview["commit"], false);
    assert!(preview.get("approve").is_none());

    // The gate blocks anything but the literal token.
    assert!(!approval_ok("approve"));
    assert!(approval_ok(" APPROVE "));

    let mut commit = event.clone();
    commit.commit = true;
    commit.approve = Some("APPROVE".to_string());
    let committed = serde_json::to_value(&commit).expect("encode commit");
    assert_eq!(committed["commit"], true);
    assert_eq!(committed["approve"], "APPROVE");
}

#[test]
fn filter_query_defaults_limit() {
    let query = TaskQuery {
        q: "lease".to_string(),
        ..TaskQuery::default()
    };

    assert_eq!(
        query.pairs(),
        vec![
            ("q", "lease".to_string()),
            ("limit", "200".to_string()),
        ]
    );
}

#[test]
fn metrics_payload_derivations() {
    let metrics: MetricsSnapshot = serde_json::from_str(
        r#"{
            "codex_prompt_tokens_24h": 1200,
            "codex_output_tokens_24h": 300,
            "anthropic_prompt_tokens_24h": 50,
            "openclaw_calls_24h": 4,
            "vm_load_1m": 0.52,
            "vm_mem_free_gb": 9.8,
            "gcp_cost_24h_usd": 1.4
        }"#,
    )
    .expect("metrics");

    let totals = token_totals(&metrics);
    assert_eq!(totals.codex_24h, 1500);
    assert_eq!(totals.anthropic_24h, 50);
    assert_eq!(totals.anthropic_1h, 0);

    assert_eq!(vm_summary(&metrics), "load=0.52 | mem_free_gb=9.8");
    assert_eq!(cost_display(&metrics), "$1.4");
}
