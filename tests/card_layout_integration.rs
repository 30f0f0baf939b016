//! Integration tests: card documents loaded from disk and laid out.

use std::fs;

use cardex_config::Config;
use cardex_layout::{Bounds, CardLayoutEngine, LayoutError, Orientation, ProportionalMetrics};
use cardex_protocol::WorkItem;
use tempfile::TempDir;

const CARD: &str = r#"
{
    // Two groups, four rows
    name: "Integration",
    spacing: { text_padding: 2, group_padding: 10 },
    groups: {
        header: {
            has_border: true,
            rows: {
                title: {
                    priority: 30,
                    columns: { subject: { font_size: 14, minimum_lines: 2 } },
                },
                meta: {
                    columns: {
                        status: { has_label: true },
                        type: { width: 40, text_align: "right" },
                    },
                },
            },
        },
        body: {
            rows: {
                description: {
                    priority: 5,
                    columns: { description: { minimum_lines: 3 } },
                },
                spacer: { height: 4, columns: {} },
            },
        },
    },
}
"#;

fn load_card() -> Config {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("card.json5");
    fs::write(&path, CARD).unwrap();
    Config::load_from(&path).unwrap()
}

fn orientation(config: &Config, width: i32, height: i32) -> Orientation {
    Orientation::new(width, height)
        .with_padding(config.spacing.text_padding, config.spacing.group_padding)
}

fn full_item() -> WorkItem {
    WorkItem::new("Card layout")
        .with_field("status", "Open")
        .with_field("type", "Task")
        .with_field("description", "Rows share the card height.")
}

#[test]
fn loaded_card_is_laid_out_top_down() {
    let config = load_card();
    assert_eq!(config.display_name(), "Integration");

    let engine = CardLayoutEngine::new(ProportionalMetrics::default());
    let item = full_item();
    let layout = engine.layout(&config.groups, &orientation(&config, 200, 200), &item);

    // 200 - 3 * 10 = 170 over four rows.
    assert_eq!(layout.available_height, 170);
    assert_eq!(layout.row_heights().collect::<Vec<_>>(), [43, 43, 42, 42]);
    assert!(layout.ensure_fits().is_ok());

    let header = &layout.groups[0];
    assert_eq!(header.key, "header");
    assert_eq!(header.bounds, Bounds::new(0, 190, 200, 81));

    let body = &layout.groups[1];
    assert_eq!(body.key, "body");
    assert_eq!(body.bounds, Bounds::new(0, 94, 200, 79));
    assert_eq!(body.rows[1].bounds, Bounds::new(0, 52, 200, 42));

    let meta = &header.rows[1];
    assert_eq!(meta.bounds.y, 147);
    let columns: Vec<(&str, Bounds)> = meta
        .columns
        .iter()
        .map(|column| (column.key, column.bounds))
        .collect();
    assert_eq!(
        columns,
        [
            ("status", Bounds::new(0, 147, 160, 43)),
            ("type", Bounds::new(160, 147, 40, 43)),
        ]
    );
    assert_eq!(meta.columns[1].text_bounds, Bounds::new(162, 145, 36, 39));
}

#[test]
fn rows_without_values_are_pruned() {
    let config = load_card();
    let engine = CardLayoutEngine::new(ProportionalMetrics::default());
    let item = WorkItem::new("Card layout").with_field("type", "Task");

    let layout = engine.layout(&config.groups, &orientation(&config, 200, 200), &item);

    let rows: Vec<&str> = layout.rows().map(|(_, row)| row.key).collect();
    assert_eq!(rows, ["title", "meta", "spacer"]);
    assert_eq!(layout.row_heights().collect::<Vec<_>>(), [57, 57, 56]);

    let meta_columns: Vec<&str> = layout.groups[0].rows[1]
        .columns
        .iter()
        .map(|column| column.key)
        .collect();
    assert_eq!(meta_columns, ["type"]);
}

#[test]
fn cramped_card_borrows_from_low_priority_rows() {
    let config = load_card();
    let engine = CardLayoutEngine::new(ProportionalMetrics::default());
    let item = full_item();

    let layout = engine.layout(&config.groups, &orientation(&config, 200, 80), &item);

    // The title takes what meta and the spacer can spare; the description
    // has nothing left to borrow from.
    assert_eq!(layout.row_heights().collect::<Vec<_>>(), [24, 10, 12, 4]);
    assert_eq!(
        layout.ensure_fits(),
        Err(LayoutError::InsufficientBudget {
            group: "header".to_string(),
            row: "title".to_string(),
            allocated: 24,
            minimum: 28,
        })
    );
}

#[test]
fn saved_card_lays_out_identically() {
    let config = load_card();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("card.json");
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded, config);

    let engine = CardLayoutEngine::new(ProportionalMetrics::default());
    let item = full_item();
    let orientation = orientation(&config, 120, 150);
    assert_eq!(
        engine.layout(&reloaded.groups, &orientation, &item),
        engine.layout(&config.groups, &orientation, &item)
    );
}

#[test]
fn invalid_document_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("card.json5");
    fs::write(&path, "{ groups: { header: { rows: { title: { priority: 1 } } } } }").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("groups.header.rows.title"));
}

#[test]
fn document_order_drives_allocation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("card.json5");
    fs::write(
        &path,
        r#"{
            spacing: { group_padding: 10 },
            groups: {
                zebra: { rows: { notes: { columns: { description: { minimum_lines: 6 } } } } },
                alpha: { rows: { state: { columns: { status: {} } } } },
            },
        }"#,
    )
    .unwrap();
    let config = Config::load_from(&path).unwrap();

    let engine = CardLayoutEngine::new(ProportionalMetrics::default());
    let layout = engine.layout(&config.groups, &orientation(&config, 100, 100), &full_item());

    let groups: Vec<&str> = layout.groups.iter().map(|group| group.key).collect();
    assert_eq!(groups, ["zebra", "alpha"]);
    // 100 - 3 * 10 = 70, split 35 / 35; the first row needs 60.
    assert_eq!(layout.row_heights().collect::<Vec<_>>(), [60, 10]);
    assert_eq!(layout.groups[0].bounds.y, 90);
}
