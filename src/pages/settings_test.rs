use super::*;

fn summary(app_id: &str, name: &str, domain: &str) -> AppSummary {
    AppSummary {
        app_id: app_id.to_owned(),
        name: name.to_owned(),
        domain: domain.to_owned(),
    }
}

fn override_row(app_id: &str, status: AppVisibilityStatus) -> AppVisibility {
    AppVisibility {
        app_id: app_id.to_owned(),
        app_name: None,
        app_domain: None,
        status,
        reviewed_by: None,
        created_at: "2025-06-01T10:00:00Z".to_owned(),
        updated_at: "2025-06-01T10:00:00Z".to_owned(),
    }
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn tabs_cover_every_section() {
    let labels: Vec<_> = SettingsTab::ALL.into_iter().map(SettingsTab::label).collect();
    assert_eq!(labels, ["General", "Apps", "Roles", "Audit Log"]);
}

// =============================================================
// App row merging
// =============================================================

#[test]
fn registry_app_without_override_has_no_status() {
    let rows = merged_app_rows(&[summary("app-1", "Chat", "chat.example.com")], &[]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Chat");
    assert_eq!(rows[0].status, None);
}

#[test]
fn override_status_wins_over_the_default() {
    let rows = merged_app_rows(
        &[summary("app-1", "Chat", "chat.example.com")],
        &[override_row("app-1", AppVisibilityStatus::Disabled)],
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, Some(AppVisibilityStatus::Disabled));
}

#[test]
fn orphan_override_is_appended_after_the_registry() {
    let rows = merged_app_rows(
        &[summary("app-1", "Chat", "chat.example.com")],
        &[override_row("app-gone", AppVisibilityStatus::Enabled)],
    );
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].app_id, "app-gone");
    // No registry entry and no recorded name, so the id stands in.
    assert_eq!(rows[1].name, "app-gone");
    assert_eq!(rows[1].status, Some(AppVisibilityStatus::Enabled));
}

#[test]
fn orphan_override_keeps_its_recorded_identity() {
    let mut orphan = override_row("app-gone", AppVisibilityStatus::Enabled);
    orphan.app_name = Some("Old Chat".to_owned());
    orphan.app_domain = Some("old.example.com".to_owned());
    let rows = merged_app_rows(&[], &[orphan]);
    assert_eq!(rows[0].name, "Old Chat");
    assert_eq!(rows[0].domain, "old.example.com");
}

// =============================================================
// Status labels
// =============================================================

#[test]
fn explicit_statuses_have_labels() {
    assert_eq!(status_label(AppVisibilityStatus::Enabled), "Enabled");
    assert_eq!(status_label(AppVisibilityStatus::Disabled), "Disabled");
    assert_eq!(status_label(AppVisibilityStatus::Pending), "Pending review");
}

#[test]
fn default_label_follows_the_community_default() {
    assert_eq!(default_status_label(AppVisibilityDefault::Open), "Default (allowed)");
    assert_eq!(
        default_status_label(AppVisibilityDefault::ApprovalRequired),
        "Default (needs approval)"
    );
}

// =============================================================
// Select value mapping
// =============================================================

#[test]
fn community_type_values_round_trip() {
    for (value, community_type) in [
        ("open", CommunityType::Open),
        ("admin-approved", CommunityType::AdminApproved),
        ("private", CommunityType::Private),
    ] {
        assert_eq!(type_value(Some(community_type)), value);
        assert_eq!(type_from_value(value), community_type);
    }
}

#[test]
fn unknown_type_value_falls_back_to_open() {
    assert_eq!(type_from_value("mystery"), CommunityType::Open);
    assert_eq!(type_value(None), "open");
}

#[test]
fn visibility_values_round_trip() {
    for (value, default) in [
        ("open", AppVisibilityDefault::Open),
        ("approval_required", AppVisibilityDefault::ApprovalRequired),
    ] {
        assert_eq!(visibility_value(default), value);
        assert_eq!(visibility_from_value(value), default);
    }
}

// =============================================================
// Role name normalization
// =============================================================

#[test]
fn role_names_are_lowercased_and_hyphenated() {
    assert_eq!(normalize_role_name("Event Host"), "event-host");
}

#[test]
fn role_names_drop_invalid_characters() {
    assert_eq!(normalize_role_name("Mod!@#erator"), "moderator");
}

#[test]
fn role_names_keep_digits_underscores_and_hyphens() {
    assert_eq!(normalize_role_name("tier_2-helper"), "tier_2-helper");
}

#[test]
fn unusable_input_normalizes_to_empty() {
    assert_eq!(normalize_role_name("!!!"), "");
}

// =============================================================
// Audit formatting
// =============================================================

#[test]
fn audit_actions_render_with_separators() {
    assert_eq!(format_audit_action("member.approve"), "member › approve");
    assert_eq!(format_audit_action("role.assignment.create"), "role › assignment › create");
}

#[test]
fn undotted_actions_pass_through() {
    assert_eq!(format_audit_action("login"), "login");
}

