use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use projectdeck_core::domain::{BoardView, ProjectDraft};
use projectdeck_core::palette::PanelMode;
use projectdeck_core::ports::BoardModal;
use tracing::info;

use super::model::{AppModel, Screen};
use crate::assistant;

/// The Update component of MVU - turns key presses into model changes
pub struct TuiUpdate;

impl TuiUpdate {
    pub fn handle_key(model: &mut AppModel, key: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if Self::handle_global_keys(model, key, modifiers) {
            return Ok(());
        }

        // An open panel captures everything that is not global
        if model.panel.is_open() {
            return Self::handle_panel_keys(model, key);
        }

        match &model.screen {
            Screen::Catalog(_) => Self::handle_catalog_keys(model, key),
            Screen::Board(_) => Self::handle_board_keys(model, key),
            Screen::About => Self::handle_about_keys(model, key),
        }
    }

    /// Keys that work in any mode. Returns true when the key was consumed.
    fn handle_global_keys(model: &mut AppModel, key: KeyCode, modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                info!("Ctrl+C pressed, quitting");
                model.should_quit = true;
                true
            }

            KeyCode::Char('p') if modifiers.contains(KeyModifiers::CONTROL) => {
                if model.panel.is_open() {
                    model.panel.close();
                } else {
                    model.panel.open();
                }
                true
            }

            _ => false,
        }
    }

    fn handle_panel_keys(model: &mut AppModel, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Esc => {
                model.panel.close();
            }

            KeyCode::Tab => {
                let context = model.command_context();
                model.panel.toggle_browser(&context);
            }

            KeyCode::Enter => match model.panel.mode {
                PanelMode::CommandBrowser => model.execute_selected_command(),
                PanelMode::Conversational => {
                    let line = model.panel_input.trim().to_string();
                    if !line.is_empty() {
                        model.panel.push_user_line(line.clone());
                        model.panel.push_assistant_line(assistant::reply(&line));
                    }
                    model.panel_input.clear();
                }
                PanelMode::Closed => {}
            },

            KeyCode::Up => {
                if model.panel.mode == PanelMode::CommandBrowser {
                    model.panel.selected = model.panel.selected.saturating_sub(1);
                }
            }

            KeyCode::Down => {
                if model.panel.mode == PanelMode::CommandBrowser {
                    let count = model
                        .panel
                        .visible_commands(&model.command_context())
                        .len();
                    if model.panel.selected + 1 < count {
                        model.panel.selected += 1;
                    }
                }
            }

            KeyCode::Backspace => match model.panel.mode {
                PanelMode::CommandBrowser => {
                    model.panel.query.pop();
                    model.panel.selected = 0;
                }
                PanelMode::Conversational => {
                    model.panel_input.pop();
                }
                PanelMode::Closed => {}
            },

            KeyCode::Char(c) => match model.panel.mode {
                PanelMode::CommandBrowser => {
                    model.panel.query.push(c);
                    model.panel.selected = 0;
                }
                PanelMode::Conversational => model.panel_input.push(c),
                PanelMode::Closed => {}
            },

            _ => {}
        }
        Ok(())
    }

    fn handle_catalog_keys(model: &mut AppModel, key: KeyCode) -> Result<()> {
        let visible_count = model.visible_projects().len();
        let Screen::Catalog(state) = &mut model.screen else {
            return Ok(());
        };

        // The new-project modal captures input while open
        if state.new_project_modal {
            match key {
                KeyCode::Char(c) => state.new_project_name.push(c),
                KeyCode::Backspace => {
                    state.new_project_name.pop();
                }
                KeyCode::Esc => {
                    state.new_project_modal = false;
                    state.new_project_name.clear();
                }
                KeyCode::Enter => {
                    let name = state.new_project_name.clone();
                    model.create_project(&name);
                }
                _ => {}
            }
            return Ok(());
        }

        // So does a focused search input
        if state.search_focused {
            match key {
                KeyCode::Char(c) => state.search_term.push(c),
                KeyCode::Backspace => {
                    state.search_term.pop();
                }
                KeyCode::Esc | KeyCode::Enter => state.search_focused = false,
                _ => {}
            }
            return Ok(());
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => model.should_quit = true,
            KeyCode::Char('n') => state.new_project_modal = true,
            KeyCode::Char('/') => state.search_focused = true,
            KeyCode::Char('v') => state.layout = state.layout.toggled(),
            KeyCode::Char('a') => model.screen = Screen::About,
            KeyCode::Down | KeyCode::Char('j') => {
                if state.selected + 1 < visible_count {
                    state.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                state.selected = state.selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                let selected = state.selected;
                let id = model.visible_projects().get(selected).map(|p| p.id.clone());
                if let Some(id) = id {
                    model.open_board(id);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_board_keys(model: &mut AppModel, key: KeyCode) -> Result<()> {
        let Screen::Board(state) = &mut model.screen else {
            return Ok(());
        };
        let project = model
            .projects
            .iter()
            .find(|p| p.id == state.project_id)
            .cloned();

        if state.modal.is_some() {
            if key == KeyCode::Esc {
                state.modal = None;
            }
            return Ok(());
        }

        if state.editing {
            if key == KeyCode::Esc {
                state.editing = false;
                state.draft = None;
            }
            return Ok(());
        }

        match key {
            KeyCode::Char('q') => model.should_quit = true,
            KeyCode::Esc => model.back_to_catalog(),
            KeyCode::Char('1') => state.view = BoardView::Kanban,
            KeyCode::Char('2') => state.view = BoardView::Pages,
            KeyCode::Char('3') => state.view = BoardView::Structure,
            KeyCode::Char('4') => state.view = BoardView::Timeline,
            KeyCode::Char('p') => state.modal = Some(BoardModal::NewPage),
            KeyCode::Char('s') => state.modal = Some(BoardModal::NewStory),
            KeyCode::Char('f') => state.modal = Some(BoardModal::NewFile),
            KeyCode::Char('e') => {
                if let Some(project) = project.as_ref() {
                    state.draft = Some(ProjectDraft::from_project(project));
                    state.editing = true;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_about_keys(model: &mut AppModel, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => model.back_to_catalog(),
            _ => {}
        }
        Ok(())
    }
}
