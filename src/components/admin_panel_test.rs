use super::*;

fn lead(name: Option<&str>, phone: Option<&str>, status: &str) -> Lead {
    Lead {
        id: 42,
        lead_type: "client_request".to_owned(),
        name: name.map(str::to_owned),
        phone: phone.map(str::to_owned),
        city: Some("Riga".to_owned()),
        work_type: Some("tiling".to_owned()),
        budget: None,
        description: None,
        status: status.to_owned(),
        created_at: None,
        attachment_count: 0,
    }
}

// =============================================================
// Cell assembly
// =============================================================

#[test]
fn contact_cell_joins_name_and_phone() {
    let lead = lead(Some("Ann"), Some("+1234"), "new");
    assert_eq!(contact_cell(&lead), "Ann\n+1234");
}

#[test]
fn contact_cell_leaves_absent_parts_blank() {
    let lead = lead(None, Some("+1234"), "new");
    assert_eq!(contact_cell(&lead), "\n+1234");
}

#[test]
fn details_cell_joins_city_work_type_budget() {
    let lead = lead(None, None, "new");
    assert_eq!(details_cell(&lead), "Riga\ntiling\n");
}

// =============================================================
// Status selector options
// =============================================================

#[test]
fn status_options_for_known_status_are_the_enum() {
    let options = status_options("done");
    assert_eq!(options, vec!["new", "in_progress", "done", "rejected"]);
}

#[test]
fn status_options_append_unknown_current_status() {
    let options = status_options("on_hold");
    assert_eq!(
        options,
        vec!["new", "in_progress", "done", "rejected", "on_hold"]
    );
}

#[test]
fn unknown_status_still_renders_a_badge() {
    let lead = lead(None, None, "on_hold");
    assert_eq!(status_badge(&lead.status), "on_hold");
}
