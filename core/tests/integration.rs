//! End-to-end scenarios against the live mock server.
//!
//! # Design
//! Each test starts the mock server on a random port, then drives the store
//! and the page view models over real HTTP. This validates the full round
//! trip the views depend on: request building, transport, response parsing,
//! state transitions, and the re-fetch that follows every mutation.

use files_core::view::delete::DeleteDialog;
use files_core::view::detail::FileDetailPage;
use files_core::view::form::FileForm;
use files_core::view::list::FileListPage;
use files_core::{FilePatch, FileStore, SortField, UreqTransport};

/// Start the mock server on a random port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn store() -> FileStore<UreqTransport> {
    FileStore::new(&start_server())
}

fn form(name: &str, date: &str, category: &str) -> FileForm {
    FileForm {
        id: None,
        file_name: name.to_string(),
        file_type: "docx".to_string(),
        last_modified: date.to_string(),
        converted: false,
        s3_url: String::new(),
        category: category.to_string(),
    }
}

#[test]
fn create_then_list_shows_the_new_row() {
    let mut store = store();

    // Fresh list page: fetch runs, list is empty, empty-state shows, and the
    // router is told to canonicalize the URL.
    let mut page = FileListPage::from_query("");
    assert_eq!(page.sync(&mut store), Some("?sort=id,asc".to_string()));
    assert!(store.state().entities.is_empty());
    assert!(FileListPage::show_empty_message(store.state()));

    // Submit the create form.
    form("a", "2025-01-07", "c").save(&mut store).unwrap();
    assert!(FileForm::should_close(store.state()));

    // The mutation's own re-fetch already made the row visible.
    assert_eq!(store.state().entities.len(), 1);
    let created = &store.state().entities[0];
    assert!(created.id.is_some());
    assert_eq!(created.file_name, "a");
    assert_eq!(created.file_type, "docx");
    assert_eq!(created.last_modified.to_string(), "2025-01-07");
    assert_eq!(created.category, "c");
    assert!(!created.converted);

    // A manual refresh leaves the URL alone and keeps exactly one row.
    assert_eq!(page.refresh(&mut store), None);
    assert_eq!(FileListPage::rows(store.state()).len(), 1);
    assert!(!FileListPage::show_empty_message(store.state()));
}

#[test]
fn sort_toggle_orders_by_file_name_both_ways() {
    let mut store = store();
    for name in ["mango", "apple", "zucchini"] {
        form(name, "2025-01-07", "produce").save(&mut store).unwrap();
    }

    let mut page = FileListPage::from_query("?sort=id,asc");

    // First click on the fileName header: new field, ascending.
    page.toggle(SortField::FileName);
    assert_eq!(page.sync(&mut store), Some("?sort=fileName,asc".to_string()));
    let names: Vec<_> = store
        .state()
        .entities
        .iter()
        .map(|f| f.file_name.clone())
        .collect();
    assert_eq!(names, ["apple", "mango", "zucchini"]);

    // Second click: same field, direction flips.
    page.toggle(SortField::FileName);
    assert_eq!(
        page.sync(&mut store),
        Some("?sort=fileName,desc".to_string())
    );
    let names: Vec<_> = store
        .state()
        .entities
        .iter()
        .map(|f| f.file_name.clone())
        .collect();
    assert_eq!(names, ["zucchini", "mango", "apple"]);

    // Sorting never changes the row count.
    assert_eq!(store.state().entities.len(), 3);
}

#[test]
fn update_round_trip_preserves_untouched_fields() {
    let mut store = store();
    form("draft.docx", "2025-01-07", "drafts")
        .save(&mut store)
        .unwrap();
    let id = store.state().entities[0].id.unwrap();

    // Edit only the name through the form.
    store.fetch_one(id);
    let loaded = store.state().entity.clone().unwrap();
    let mut edit = FileForm::edit(&loaded);
    edit.file_name = "final.docx".to_string();
    edit.save(&mut store).unwrap();
    assert!(FileForm::should_close(store.state()));

    store.fetch_one(id);
    let after_update = store.state().entity.clone().unwrap();
    assert_eq!(after_update.file_name, "final.docx");
    assert_eq!(after_update.file_type, "docx");
    assert_eq!(after_update.last_modified.to_string(), "2025-01-07");
    assert_eq!(after_update.category, "drafts");

    // The conversion pipeline reports its outcome through a partial update;
    // everything it does not touch stays put.
    store.partial_update(
        id,
        &FilePatch {
            converted: Some(true),
            s3_url: Some("s3://converted/final.pdf".to_string()),
            ..FilePatch::default()
        },
    );
    store.fetch_one(id);
    let after_patch = store.state().entity.clone().unwrap();
    assert_eq!(after_patch.file_name, "final.docx");
    assert!(after_patch.converted);
    assert_eq!(after_patch.s3_url.as_deref(), Some("s3://converted/final.pdf"));
}

#[test]
fn detail_page_renders_the_fetched_file() {
    let mut store = store();
    form("notes.docx", "2024-11-30", "notes")
        .save(&mut store)
        .unwrap();
    let id = store.state().entities[0].id.unwrap();

    let page = FileDetailPage::new(id);
    page.load(&mut store);

    let fields = FileDetailPage::fields(store.state());
    let value = |label: &str| {
        fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.clone())
            .unwrap()
    };
    assert_eq!(value("fileName"), "notes.docx");
    assert_eq!(value("lastModified"), "30/11/2024");
    assert_eq!(value("converted"), "false");
    assert_eq!(page.edit_target(), format!("/file/{id}/edit"));
}

#[test]
fn deleting_a_missing_id_reports_an_error_and_leaves_the_list_alone() {
    let mut store = store();
    form("survivor", "2025-01-07", "c").save(&mut store).unwrap();
    assert_eq!(store.state().entities.len(), 1);

    store.delete(999);

    assert_eq!(
        store.state().error_message.as_deref(),
        Some("resource not found")
    );
    assert!(!store.state().update_success);
    assert_eq!(store.state().entities.len(), 1);
}

#[test]
fn deleting_the_last_row_leaves_the_list_in_its_empty_state() {
    let mut store = store();
    form("last-one", "2025-01-07", "c").save(&mut store).unwrap();
    let id = store.state().entities[0].id.unwrap();

    let dialog = DeleteDialog::open(id, &mut store);
    dialog.confirm(&mut store);

    assert!(DeleteDialog::should_close(store.state()));
    // The deletion's own list re-fetch came back empty.
    assert!(store.state().entities.is_empty());
    assert!(FileListPage::show_empty_message(store.state()));
}
