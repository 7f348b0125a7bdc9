use projectdeck_core::domain::{BoardView, CatalogLayout, StatusFilter};
use projectdeck_core::palette::{ChatRole, CommandContext, Notification, PanelMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::model::{AppModel, BoardState, CatalogState, Screen};

/// The View component of MVU - renders the model, never mutates it
pub struct TuiView;

impl TuiView {
    pub fn render(model: &AppModel, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(0),    // Main content
                Constraint::Length(2), // Status bar
            ])
            .split(size);

        Self::render_title_bar(model, frame, chunks[0]);

        match &model.screen {
            Screen::Catalog(state) => Self::render_catalog(model, state, frame, chunks[1]),
            Screen::Board(state) => Self::render_board(state, frame, chunks[1]),
            Screen::About => Self::render_about(frame, chunks[1]),
        }

        Self::render_status_bar(model, frame, chunks[2]);

        if model.panel.is_open() {
            Self::render_panel(model, frame, size);
        }
    }

    fn render_title_bar(model: &AppModel, frame: &mut Frame, area: Rect) {
        let title = match &model.screen {
            Screen::Catalog(state) => format!(
                "projectdeck - Catalog ({})",
                match state.layout {
                    CatalogLayout::Grid => "grid",
                    CatalogLayout::List => "list",
                }
            ),
            Screen::Board(state) => {
                let name = model
                    .project(&state.project_id)
                    .map(|p| p.name.as_str())
                    .unwrap_or("unknown project");
                format!("projectdeck - {} · {}", name, state.view.label())
            }
            Screen::About => "projectdeck - About".to_string(),
        };

        let title_paragraph = Paragraph::new(title)
            .style(Style::default().fg(Color::White).bg(Color::Blue))
            .alignment(Alignment::Center);
        frame.render_widget(title_paragraph, area);
    }

    fn render_catalog(model: &AppModel, state: &CatalogState, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search + filters
                Constraint::Min(0),    // Projects
            ])
            .split(area);

        let filter_label = match state.status_filter {
            StatusFilter::All => "all".to_string(),
            StatusFilter::Only(status) => status.to_string(),
        };
        let search_style = if state.search_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let search = Paragraph::new(format!(
            "Search: {}  |  Status: {}  |  Sort: {:?}",
            state.search_term, filter_label, state.sort
        ))
        .style(search_style)
        .block(Block::default().borders(Borders::ALL).title("Filters"));
        frame.render_widget(search, chunks[0]);

        let projects = model.visible_projects();
        if projects.is_empty() {
            let empty = Paragraph::new("No projects match the current filters. Press 'n' to create one.")
                .block(Block::default().borders(Borders::ALL).title("Projects"));
            frame.render_widget(empty, chunks[1]);
        } else {
            match state.layout {
                CatalogLayout::List => {
                    let items: Vec<ListItem> = projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let style = if i == state.selected {
                                Style::default()
                                    .fg(Color::Black)
                                    .bg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD)
                            } else {
                                Style::default()
                            };
                            ListItem::new(Line::from(vec![
                                Span::styled(project.name.clone(), style),
                                Span::raw(format!(
                                    "  [{}]  {}",
                                    project.status, project.description
                                )),
                            ]))
                        })
                        .collect();
                    let list = List::new(items)
                        .block(Block::default().borders(Borders::ALL).title("Projects"));
                    frame.render_widget(list, chunks[1]);
                }
                CatalogLayout::Grid => Self::render_catalog_grid(state, &projects, frame, chunks[1]),
            }
        }

        if state.new_project_modal {
            let popup = Self::centered_rect(50, 20, area);
            frame.render_widget(Clear, popup);
            let modal = Paragraph::new(format!("Name: {}_", state.new_project_name))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("New Project (Enter to create, Esc to cancel)"),
                );
            frame.render_widget(modal, popup);
        }
    }

    fn render_catalog_grid(
        state: &CatalogState,
        projects: &[&projectdeck_core::domain::Project],
        frame: &mut Frame,
        area: Rect,
    ) {
        let block = Block::default().borders(Borders::ALL).title("Projects");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        for (col, column_area) in columns.iter().enumerate() {
            let items: Vec<ListItem> = projects
                .iter()
                .enumerate()
                .filter(|(i, _)| i % 2 == col)
                .map(|(i, project)| {
                    let style = if i == state.selected {
                        Style::default().fg(Color::Black).bg(Color::Cyan)
                    } else {
                        Style::default()
                    };
                    ListItem::new(vec![
                        Line::from(Span::styled(project.name.clone(), style)),
                        Line::from(format!("  {} · {}", project.status, project.description)),
                    ])
                })
                .collect();
            frame.render_widget(List::new(items), *column_area);
        }
    }

    fn render_board(state: &BoardState, frame: &mut Frame, area: Rect) {
        match state.view {
            BoardView::Kanban => Self::render_kanban(frame, area),
            BoardView::Pages | BoardView::Structure | BoardView::Timeline => {
                let body = Paragraph::new(format!(
                    "{} view. Switch views with 1-4, open the assistant with Ctrl+P.",
                    state.view.label()
                ))
                .block(Block::default().borders(Borders::ALL).title(state.view.label()));
                frame.render_widget(body, area);
            }
        }

        if let Some(modal) = state.modal {
            let popup = Self::centered_rect(50, 25, area);
            frame.render_widget(Clear, popup);
            let body = Paragraph::new("Press Esc to close")
                .block(Block::default().borders(Borders::ALL).title(modal.title()));
            frame.render_widget(body, popup);
        }

        if state.editing {
            if let Some(draft) = &state.draft {
                let popup = Self::centered_rect(60, 40, area);
                frame.render_widget(Clear, popup);
                let lines = vec![
                    Line::from(format!("Name: {}", draft.name)),
                    Line::from(format!("Description: {}", draft.description)),
                    Line::from(format!("Color: {}", draft.color)),
                    Line::from(format!("Tech stack: {}", draft.tech_stack.join(", "))),
                ];
                let body = Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(Block::default().borders(Borders::ALL).title("Edit Project"));
                frame.render_widget(body, popup);
            }
        }
    }

    fn render_kanban(frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        for (title, column_area) in ["Backlog", "In Progress", "Review", "Done"]
            .iter()
            .zip(columns.iter())
        {
            let column = Paragraph::new("")
                .block(Block::default().borders(Borders::ALL).title(*title));
            frame.render_widget(column, *column_area);
        }
    }

    fn render_about(frame: &mut Frame, area: Rect) {
        let body = Paragraph::new(vec![
            Line::from("projectdeck - a terminal UI for managing software projects"),
            Line::from(""),
            Line::from("The assistant panel has no commands on this screen;"),
            Line::from("it stays in conversational mode here."),
            Line::from(""),
            Line::from("Press Esc to go back."),
        ])
        .block(Block::default().borders(Borders::ALL).title("About"));
        frame.render_widget(body, area);
    }

    fn render_status_bar(model: &AppModel, frame: &mut Frame, area: Rect) {
        let notification = match model.panel.last_notification() {
            Some(Notification::Success { command }) => {
                Span::styled(format!("✓ {command}"), Style::default().fg(Color::Green))
            }
            Some(Notification::Failure { command, reason }) => Span::styled(
                format!("✗ {command}: {reason}"),
                Style::default().fg(Color::Red),
            ),
            None => Span::raw(""),
        };

        let keys = match &model.screen {
            Screen::Catalog(_) => "n:new  /:search  v:layout  a:about  Ctrl+P:assistant  q:quit",
            Screen::Board(_) => "1-4:views  p/s/f:create  e:edit  Esc:back  Ctrl+P:assistant",
            Screen::About => "Esc:back",
        };

        let bar = Paragraph::new(vec![Line::from(notification), Line::from(keys)]);
        frame.render_widget(bar, area);
    }

    /// The floating assistant panel, rendered above everything else
    fn render_panel(model: &AppModel, frame: &mut Frame, area: Rect) {
        let popup = Self::centered_rect(60, 60, area);
        frame.render_widget(Clear, popup);

        let context = model.command_context();
        let browser_hint = if context.has_commands() {
            "Tab: commands"
        } else {
            "no commands here"
        };
        let title = match &context {
            CommandContext::Board(provider) => format!(
                "Assistant · Board · {} ({})",
                provider.current_view().label(),
                browser_hint
            ),
            _ => format!("Assistant · {} ({})", context.label(), browser_hint),
        };

        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // History or command list
                Constraint::Length(1), // Input line
            ])
            .split(inner);

        match model.panel.mode {
            PanelMode::CommandBrowser => Self::render_command_browser(model, &context, frame, chunks[0], chunks[1]),
            _ => Self::render_conversation(model, frame, chunks[0], chunks[1]),
        }
    }

    fn render_conversation(model: &AppModel, frame: &mut Frame, body: Rect, input: Rect) {
        let items: Vec<ListItem> = model
            .panel
            .history
            .iter()
            .map(|entry| {
                let (prefix, style) = match entry.role {
                    ChatRole::User => ("you> ", Style::default().fg(Color::Cyan)),
                    ChatRole::Assistant => ("deck> ", Style::default().fg(Color::Green)),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::raw(entry.text.clone()),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items), body);

        let input_line = Paragraph::new(format!("> {}_", model.panel_input));
        frame.render_widget(input_line, input);
    }

    fn render_command_browser(
        model: &AppModel,
        context: &CommandContext,
        frame: &mut Frame,
        body: Rect,
        input: Rect,
    ) {
        let commands = model.panel.visible_commands(context);
        let items: Vec<ListItem> = commands
            .iter()
            .enumerate()
            .map(|(i, command)| {
                let style = if i == model.panel.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let shortcut = command
                    .shortcut
                    .map(|s| format!("  [{s}]"))
                    .unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", command.icon)),
                    Span::styled(command.name.clone(), style),
                    Span::styled(shortcut, Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("  {}", command.description),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items), body);

        let query_line = Paragraph::new(format!("search: {}_", model.panel.query));
        frame.render_widget(query_line, input);
    }

    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1])[1]
    }
}
