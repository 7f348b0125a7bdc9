use projectdeck::config::Config;
use projectdeck::store;
use projectdeck::tui::model::{AppModel, Screen};
use projectdeck_core::domain::{BoardView, CatalogLayout, ProjectId, SortOption, StatusFilter};
use projectdeck_core::palette::{Notification, PanelMode};
use projectdeck_core::ports::BoardModal;

fn test_model() -> AppModel {
    AppModel::new(&Config::default(), store::sample_projects())
}

/// Open the assistant, enter the command browser, select the given command
/// by id and execute it.
fn run_palette_command(model: &mut AppModel, id: &str) {
    model.panel.open();
    if model.panel.mode != PanelMode::CommandBrowser {
        let context = model.command_context();
        model.panel.toggle_browser(&context);
    }
    let context = model.command_context();
    let commands = model.panel.visible_commands(&context);
    let index = commands
        .iter()
        .position(|c| c.id == id)
        .unwrap_or_else(|| panic!("command {id} not available in this context"));
    model.panel.selected = index;
    model.execute_selected_command();
}

fn catalog_state(model: &AppModel) -> &projectdeck::tui::model::CatalogState {
    match &model.screen {
        Screen::Catalog(state) => state,
        other => panic!("expected catalog screen, got {other:?}"),
    }
}

fn board_state(model: &AppModel) -> &projectdeck::tui::model::BoardState {
    match &model.screen {
        Screen::Board(state) => state,
        other => panic!("expected board screen, got {other:?}"),
    }
}

#[test]
fn catalog_context_lists_ten_commands_in_declared_order() {
    let mut model = test_model();
    model.panel.open();
    let context = model.command_context();
    model.panel.toggle_browser(&context);
    assert_eq!(model.panel.mode, PanelMode::CommandBrowser);

    let ids: Vec<String> = model
        .panel
        .visible_commands(&context)
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(
        ids,
        vec![
            "create-project",
            "toggle-layout",
            "clear-filters",
            "focus-search",
            "sort-name",
            "sort-date",
            "filter-planning",
            "filter-development",
            "filter-testing",
            "filter-deployed",
        ]
    );
}

#[test]
fn about_screen_has_no_commands_and_browser_is_unavailable() {
    let mut model = test_model();
    model.screen = Screen::About;
    model.panel.open();

    let context = model.command_context();
    assert!(!context.has_commands());
    assert!(context.commands().is_empty());

    model.panel.toggle_browser(&context);
    assert_eq!(model.panel.mode, PanelMode::Conversational);
}

#[test]
fn create_project_command_opens_the_modal() {
    let mut model = test_model();
    run_palette_command(&mut model, "create-project");

    assert!(catalog_state(&model).new_project_modal);
    assert_eq!(
        model.panel.last_notification(),
        Some(&Notification::Success {
            command: "Create New Project".to_string()
        })
    );
    // Browser closed, panel still open
    assert_eq!(model.panel.mode, PanelMode::Conversational);
}

#[test]
fn clear_filters_resets_search_status_and_sort() {
    let mut model = test_model();
    run_palette_command(&mut model, "filter-testing");
    run_palette_command(&mut model, "sort-name");
    {
        let Screen::Catalog(state) = &mut model.screen else {
            unreachable!()
        };
        state.search_term = "portal".to_string();
    }

    run_palette_command(&mut model, "clear-filters");

    let state = catalog_state(&model);
    assert_eq!(state.search_term, "");
    assert_eq!(state.status_filter, StatusFilter::All);
    assert_eq!(state.sort, SortOption::DateAsc);
}

#[test]
fn toggle_layout_alternates_across_repeated_executions() {
    let mut model = test_model();
    assert_eq!(catalog_state(&model).layout, CatalogLayout::Grid);

    run_palette_command(&mut model, "toggle-layout");
    assert_eq!(catalog_state(&model).layout, CatalogLayout::List);

    // The provider is rebuilt per materialization, so a second run sees the
    // new layout and flips back
    run_palette_command(&mut model, "toggle-layout");
    assert_eq!(catalog_state(&model).layout, CatalogLayout::Grid);
}

#[test]
fn focus_search_command_focuses_the_search_input() {
    let mut model = test_model();
    assert!(!catalog_state(&model).search_focused);

    run_palette_command(&mut model, "focus-search");
    assert!(catalog_state(&model).search_focused);
}

#[test]
fn board_context_lists_thirteen_commands_and_switches_views() {
    let mut model = test_model();
    model.open_board(ProjectId::from_name("Shipping Portal"));

    model.panel.open();
    let context = model.command_context();
    model.panel.toggle_browser(&context);
    assert_eq!(model.panel.visible_commands(&context).len(), 13);

    run_palette_command(&mut model, "view-timeline");
    assert_eq!(board_state(&model).view, BoardView::Timeline);
}

#[test]
fn board_creation_commands_open_their_modals() {
    let mut model = test_model();
    model.open_board(ProjectId::from_name("Billing Engine"));

    run_palette_command(&mut model, "create-story");
    assert_eq!(board_state(&model).modal, Some(BoardModal::NewStory));
}

#[test]
fn edit_project_command_fills_the_draft_with_defaults() {
    let mut model = test_model();
    // Billing Engine ships without color or tech stack in the sample catalog
    model.open_board(ProjectId::from_name("Billing Engine"));

    run_palette_command(&mut model, "edit-project");

    let state = board_state(&model);
    assert!(state.editing);
    let draft = state.draft.as_ref().expect("draft populated");
    assert_eq!(draft.name, "Billing Engine");
    assert_eq!(draft.color, "");
    assert!(draft.tech_stack.is_empty());
}

#[test]
fn failed_command_keeps_chat_history_and_panel_open() {
    let mut model = test_model();
    model.panel.open();
    model.panel.push_user_line("hello".to_string());
    model.panel.push_assistant_line("hi".to_string());

    let failing = projectdeck_core::command::Command::new(
        "broken",
        "Broken Command",
        "Always fails",
        "!",
        || {
            Err(projectdeck_core::CoreError::CommandFailed {
                reason: "simulated".to_string(),
            })
        },
    );
    let notification = model.panel.execute(&failing);

    assert!(matches!(
        notification,
        Notification::Failure { ref command, .. } if command == "Broken Command"
    ));
    assert_eq!(model.panel.history.len(), 2);
    assert!(model.panel.is_open());
}

#[test]
fn status_filter_command_narrows_visible_projects() {
    let mut model = test_model();
    assert_eq!(model.visible_projects().len(), 3);

    run_palette_command(&mut model, "filter-deployed");

    let visible = model.visible_projects();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Status Page");
}
