use std::io::Write;
use std::time::{Duration, Instant};
use stockcheck_ui::app::actions::MemoryClipboard;
use stockcheck_ui::app::upload::UploadRules;
use stockcheck_ui::core::modal::ModalState;
use stockcheck_ui::domain::model::Severity;
use stockcheck_ui::{Dashboard, PanelConfig, UiAction};
use tempfile::TempDir;

fn dashboard() -> Dashboard<MemoryClipboard> {
    Dashboard::new(MemoryClipboard::default(), Duration::from_millis(500), 3000)
}

#[test]
fn test_show_details_then_escape() {
    let mut dash = dashboard();
    let now = Instant::now();

    dash.dispatch(
        UiAction::ShowContainerDetails {
            sku: "SKU1".to_string(),
            container_details: "200 (1/28/26), 250 (1/31/26)".to_string(),
            container_qty: "450".to_string(),
        },
        now,
    );
    let view = dash.modal().view().expect("modal should be open");
    assert_eq!(view.entries.len(), 2);
    assert_eq!(view.total_quantity, "450");

    dash.dispatch(UiAction::KeyPressed("a".to_string()), now);
    assert!(dash.modal().is_open());

    dash.dispatch(UiAction::KeyPressed("Escape".to_string()), now);
    assert_eq!(dash.modal(), &ModalState::Closed);

    dash.dispatch(UiAction::CloseModal, now);
    assert_eq!(dash.modal(), &ModalState::Closed);
}

#[test]
fn test_copy_button_writes_clipboard_and_toasts() {
    let mut dash = dashboard();
    let now = Instant::now();

    dash.dispatch(UiAction::CopyText("CHAIR-01".to_string()), now);

    assert_eq!(dash.clipboard().contents.as_deref(), Some("CHAIR-01"));
    let toast = dash.toasts().last().unwrap();
    assert_eq!(toast.severity, Severity::Success);
    assert_eq!(toast.duration_ms, 3000);
}

#[test]
fn test_toasts_expire_on_tick() {
    let mut dash = dashboard();
    let now = Instant::now();
    dash.dispatch(UiAction::CopyText("X".to_string()), now);
    assert_eq!(dash.toasts().len(), 1);

    dash.tick(Instant::now() + Duration::from_millis(3001));
    assert!(dash.toasts().is_empty());
}

#[test]
fn test_search_is_debounced() {
    let mut dash = dashboard();
    let t0 = Instant::now();

    dash.dispatch(UiAction::SearchInput("ch".to_string()), t0);
    dash.dispatch(
        UiAction::SearchInput("chair".to_string()),
        t0 + Duration::from_millis(200),
    );

    assert_eq!(dash.tick(t0 + Duration::from_millis(600)), None);
    assert_eq!(
        dash.tick(t0 + Duration::from_millis(700)),
        Some("chair".to_string())
    );
    assert_eq!(dash.tick(t0 + Duration::from_millis(900)), None);
}

#[test]
fn test_tooltips_are_per_element() {
    let mut dash = dashboard();
    let now = Instant::now();

    dash.dispatch(
        UiAction::ShowTooltip {
            element_id: "incoming-CHAIR-01".to_string(),
            text: "2 containers".to_string(),
        },
        now,
    );
    assert_eq!(dash.tooltips().len(), 1);

    dash.dispatch(
        UiAction::HideTooltip {
            element_id: "incoming-CHAIR-01".to_string(),
        },
        now,
    );
    assert!(dash.tooltips().is_empty());
}

#[test]
fn test_upload_validation_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("CheckStockTempFile_01-28-26.xlsx");
    std::fs::File::create(&good)
        .unwrap()
        .write_all(b"PK\x03\x04")
        .unwrap();

    let candidate = UploadRules::default().validate_path(&good).unwrap();
    assert_eq!(candidate.size_bytes, 4);
    assert_eq!(candidate.file_date.to_string(), "2026-01-28");

    let missing = temp_dir.path().join("CheckStockTempFile_01-29-26.xlsx");
    assert!(UploadRules::default().validate_path(&missing).is_err());
}

#[test]
fn test_config_drives_dashboard_settings() {
    let config = PanelConfig::from_toml_str(
        r#"
[search]
debounce_ms = 250

[toast]
duration_ms = 1000
"#,
    )
    .unwrap();

    let mut dash = Dashboard::new(
        MemoryClipboard::default(),
        config.debounce(),
        config.toast.duration_ms,
    );
    let t0 = Instant::now();
    dash.dispatch(UiAction::SearchInput("desk".to_string()), t0);
    assert_eq!(
        dash.tick(t0 + Duration::from_millis(250)),
        Some("desk".to_string())
    );

    dash.dispatch(UiAction::CopyText("DESK-02".to_string()), t0);
    assert_eq!(dash.toasts().last().unwrap().duration_ms, 1000);
}

#[test]
fn test_delete_action_blocking() {
    use stockcheck_ui::app::actions::delete_file;
    use stockcheck_ui::domain::model::DeleteFileResponse;
    use stockcheck_ui::domain::ports::FileApi;

    struct Accepting;

    #[async_trait::async_trait]
    impl FileApi for Accepting {
        async fn delete_file(&self, file_id: &str) -> stockcheck_ui::Result<DeleteFileResponse> {
            Ok(DeleteFileResponse {
                success: true,
                message: Some(format!("Deleted {}", file_id)),
                error: None,
            })
        }
    }

    let mut dash = dashboard();
    let deleted = tokio_test::block_on(delete_file(&Accepting, dash.toasts_mut(), "f-1", 3000));
    assert_eq!(deleted.unwrap(), "Deleted f-1");
    assert_eq!(dash.toasts().last().unwrap().message, "Deleted f-1");
}
