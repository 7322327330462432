use super::*;

// =============================================================
// Status badge mapping
// =============================================================

#[test]
fn status_badge_maps_known_statuses() {
    assert_eq!(status_badge("new"), "NEW");
    assert_eq!(status_badge("in_progress"), "IN PROGRESS");
    assert_eq!(status_badge("done"), "DONE");
    assert_eq!(status_badge("rejected"), "REJECTED");
}

#[test]
fn status_badge_passes_unknown_values_through() {
    assert_eq!(status_badge("on_hold"), "on_hold");
    assert_eq!(status_badge(""), "");
}

#[test]
fn known_statuses_all_have_distinct_badges() {
    let badges: Vec<&str> = LEAD_STATUSES.iter().map(|s| status_badge(s)).collect();
    for (i, a) in badges.iter().enumerate() {
        for b in &badges[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// Lead submission payload
// =============================================================

#[test]
fn from_form_maps_empty_fields_to_none() {
    let lead = NewLead::from_form("", "+1234", "", "", "", "leak");
    assert_eq!(lead.lead_type, CLIENT_REQUEST);
    assert_eq!(lead.name, None);
    assert_eq!(lead.phone, Some("+1234".to_owned()));
    assert_eq!(lead.city, None);
    assert_eq!(lead.work_type, None);
    assert_eq!(lead.budget, None);
    assert_eq!(lead.description, Some("leak".to_owned()));
}

#[test]
fn from_form_never_produces_empty_strings() {
    let lead = NewLead::from_form("", "", "", "", "", "");
    assert_eq!(lead.name, None);
    assert_eq!(lead.phone, None);
    assert_eq!(lead.city, None);
    assert_eq!(lead.work_type, None);
    assert_eq!(lead.budget, None);
    assert_eq!(lead.description, None);
}

#[test]
fn payload_serializes_absent_fields_as_null() {
    let lead = NewLead::from_form("", "+1234", "", "", "", "leak");
    let value = serde_json::to_value(&lead).expect("payload serializes");

    assert_eq!(value["lead_type"], "client_request");
    assert_eq!(value["name"], serde_json::Value::Null);
    assert_eq!(value["phone"], "+1234");
    assert_eq!(value["description"], "leak");

    // Absent fields are explicit nulls, not omitted keys.
    let object = value.as_object().expect("json object");
    assert!(object.contains_key("name"));
    assert!(object.contains_key("budget"));
}

// =============================================================
// Response deserialization
// =============================================================

#[test]
fn lead_deserializes_with_unknown_status() {
    let lead: Lead = serde_json::from_value(serde_json::json!({
        "id": 42,
        "lead_type": "client_request",
        "name": "Ann",
        "phone": null,
        "city": "Riga",
        "work_type": null,
        "budget": null,
        "description": null,
        "status": "triaged_elsewhere",
        "created_at": "2025-06-01T12:00:00Z",
        "attachment_count": 3
    }))
    .expect("lead deserializes");

    assert_eq!(lead.id, 42);
    assert_eq!(lead.status, "triaged_elsewhere");
    assert_eq!(status_badge(&lead.status), "triaged_elsewhere");
    assert_eq!(lead.attachment_count, 3);
}

#[test]
fn lead_tolerates_missing_server_extras() {
    let lead: Lead = serde_json::from_value(serde_json::json!({
        "id": 1,
        "lead_type": "client_request",
        "name": null,
        "phone": null,
        "city": null,
        "work_type": null,
        "budget": null,
        "description": null,
        "status": "new"
    }))
    .expect("lead deserializes without created_at");

    assert_eq!(lead.created_at, None);
    assert_eq!(lead.attachment_count, 0);
}

#[test]
fn content_items_ignore_extra_fields() {
    let item: FaqItem = serde_json::from_value(serde_json::json!({
        "id": 7,
        "question": "Q1",
        "answer": "A1"
    }))
    .expect("faq item deserializes");
    assert_eq!(item.question, "Q1");

    let project: ProjectItem = serde_json::from_value(serde_json::json!({
        "id": 3,
        "title": "Loft"
    }))
    .expect("project without description deserializes");
    assert_eq!(project.description, None);
    assert_eq!(project.image, None);
}

#[test]
fn created_lead_reads_id_and_status_only() {
    let created: CreatedLead = serde_json::from_value(serde_json::json!({
        "id": 9,
        "status": "new",
        "lead_type": "client_request",
        "created_at": "2025-06-01T12:00:00Z"
    }))
    .expect("created lead deserializes");
    assert_eq!(created.id, 9);
    assert_eq!(created.status, "new");
}
