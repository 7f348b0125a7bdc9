//! Channel-backed implementations of the core's mutation ports.
//!
//! Commands run inside the palette while the event loop owns the model, so
//! ports cannot mutate it directly. Each port pushes actions onto the host
//! channel; the update loop drains and applies them right after execution.

use crossbeam_channel::Sender;
use projectdeck_core::ports::{BoardAction, BoardPort, CatalogAction, CatalogPort};
use tracing::warn;

/// Everything a command may ask the host event loop to do
#[derive(Debug, Clone, PartialEq)]
pub enum HostAction {
    Catalog(CatalogAction),
    Board(BoardAction),
    /// Best-effort focus request for the catalog search input
    FocusSearch,
}

pub struct ChannelCatalogPort {
    tx: Sender<HostAction>,
}

impl ChannelCatalogPort {
    pub fn new(tx: Sender<HostAction>) -> Self {
        Self { tx }
    }
}

impl CatalogPort for ChannelCatalogPort {
    fn dispatch(&self, action: CatalogAction) {
        if self.tx.send(HostAction::Catalog(action)).is_err() {
            warn!("catalog action dropped: host channel closed");
        }
    }

    fn focus_search_input(&self) -> bool {
        self.tx.send(HostAction::FocusSearch).is_ok()
    }
}

pub struct ChannelBoardPort {
    tx: Sender<HostAction>,
}

impl ChannelBoardPort {
    pub fn new(tx: Sender<HostAction>) -> Self {
        Self { tx }
    }
}

impl BoardPort for ChannelBoardPort {
    fn dispatch(&self, action: BoardAction) {
        if self.tx.send(HostAction::Board(action)).is_err() {
            warn!("board action dropped: host channel closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use projectdeck_core::domain::BoardView;

    #[test]
    fn test_catalog_port_forwards_actions() {
        let (tx, rx) = unbounded();
        let port = ChannelCatalogPort::new(tx);

        port.dispatch(CatalogAction::SetSearchTerm("api".to_string()));
        assert!(port.focus_search_input());

        assert_eq!(
            rx.try_recv().unwrap(),
            HostAction::Catalog(CatalogAction::SetSearchTerm("api".to_string()))
        );
        assert_eq!(rx.try_recv().unwrap(), HostAction::FocusSearch);
    }

    #[test]
    fn test_board_port_forwards_actions() {
        let (tx, rx) = unbounded();
        let port = ChannelBoardPort::new(tx);

        port.dispatch(BoardAction::SetView(BoardView::Pages));
        assert_eq!(
            rx.try_recv().unwrap(),
            HostAction::Board(BoardAction::SetView(BoardView::Pages))
        );
    }

    #[test]
    fn test_closed_channel_is_a_silent_drop() {
        let (tx, rx) = unbounded();
        drop(rx);
        let port = ChannelCatalogPort::new(tx);

        // Must not panic; focus reports the input as unreachable
        port.dispatch(CatalogAction::SetModalOpen(true));
        assert!(!port.focus_search_input());
    }
}
