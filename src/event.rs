use tokio::sync::mpsc;

use crate::listing::FileNode;

/// Notifications from the file list to its container.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingEvent {
    /// A file was committed (double click / Enter) and should be opened.
    Open(FileNode),
    /// The selection changed.
    Select(FileNode),
    /// A rename was rejected; the old name has been restored.
    Error { message: String },
}

/// Channel between a file list and whoever hosts it.
pub struct EventChannel {
    rx: mpsc::UnboundedReceiver<ListingEvent>,
    tx: mpsc::UnboundedSender<ListingEvent>,
}

impl EventChannel {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { rx, tx }
    }

    /// Get a sender clone for a file list.
    pub fn sender(&self) -> mpsc::UnboundedSender<ListingEvent> {
        self.tx.clone()
    }

    /// Receive the next event, waiting until one is available.
    pub async fn next(&mut self) -> Option<ListingEvent> {
        self.rx.recv().await
    }

    /// Drain the events that are already queued.
    pub fn drain(&mut self) -> Vec<ListingEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_events_in_order() {
        let mut channel = EventChannel::new();
        let tx = channel.sender();
        let file = FileNode::new("a.ktr", "ktr", "/");
        tx.send(ListingEvent::Select(file.clone())).unwrap();
        tx.send(ListingEvent::Open(file.clone())).unwrap();

        let events = channel.drain();
        assert_eq!(
            events,
            vec![ListingEvent::Select(file.clone()), ListingEvent::Open(file)]
        );
        assert!(channel.drain().is_empty());
    }

    #[tokio::test]
    async fn next_receives_sent_event() {
        let mut channel = EventChannel::new();
        channel
            .sender()
            .send(ListingEvent::Error {
                message: "boom".into(),
            })
            .unwrap();
        assert_eq!(
            channel.next().await,
            Some(ListingEvent::Error {
                message: "boom".into()
            })
        );
    }
}
