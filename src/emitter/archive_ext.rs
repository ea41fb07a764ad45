use std::fmt;

use event_emitter_rs::EventEmitter;

use crate::archive::Archive;
use crate::error::Result;
use crate::material::{Material, MaterialDetails};

/// Change notifications raised by [`ArchiveEmitter`]. The payload of every
/// event is the affected material's title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveEvent {
    MaterialAdded,
    MaterialUpdated,
    MaterialRemoved,
}

impl ArchiveEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveEvent::MaterialAdded => "MaterialAdded",
            ArchiveEvent::MaterialUpdated => "MaterialUpdated",
            ArchiveEvent::MaterialRemoved => "MaterialRemoved",
        }
    }
}

impl fmt::Display for ArchiveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrapper that records archive changes and fires listeners for them.
///
/// Mutations made through the wrapper enqueue an event only when they
/// succeed. Queued events are delivered by [`emit_queued`](Self::emit_queued).
///
/// # Example
///
/// ```ignore
/// use material_archive::{Archive, ArchiveEvent, EmittableArchive};
///
/// let mut emitter = Archive::new().with_emitter();
///
/// emitter.on(ArchiveEvent::MaterialAdded, |title| {
///     println!("added: {}", title);
/// });
///
/// emitter.add(material)?;
/// emitter.emit_queued();
/// ```
pub struct ArchiveEmitter {
    archive: Archive,
    event_emitter: EventEmitter,
    events_to_emit: Vec<(ArchiveEvent, String)>,
}

impl ArchiveEmitter {
    pub fn new(archive: Archive) -> Self {
        Self {
            archive,
            event_emitter: EventEmitter::new(),
            events_to_emit: Vec::new(),
        }
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Direct mutable access. Changes made this way are not recorded.
    pub fn archive_mut(&mut self) -> &mut Archive {
        &mut self.archive
    }

    pub fn into_archive(self) -> Archive {
        self.archive
    }

    /// [`Archive::add`], queueing `MaterialAdded` on success.
    pub fn add(&mut self, material: Material) -> Result<()> {
        let title = material.title.clone();
        self.archive.add(material)?;
        self.enqueue(ArchiveEvent::MaterialAdded, title);
        Ok(())
    }

    /// [`Archive::update`], queueing `MaterialUpdated` on success.
    pub fn update(&mut self, title: &str, details: MaterialDetails) -> Result<()> {
        self.archive.update(title, details)?;
        self.enqueue(ArchiveEvent::MaterialUpdated, title);
        Ok(())
    }

    /// [`Archive::remove`], queueing `MaterialRemoved` when something was removed.
    pub fn remove(&mut self, title: &str) -> Option<Material> {
        let removed = self.archive.remove(title)?;
        self.enqueue(ArchiveEvent::MaterialRemoved, title);
        Some(removed)
    }

    fn enqueue(&mut self, event: ArchiveEvent, title: impl Into<String>) {
        self.events_to_emit.push((event, title.into()));
    }

    /// Register a listener. Listeners run on background threads.
    pub fn on<F>(&mut self, event: ArchiveEvent, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event.as_str(), listener);
    }

    /// Emit an event immediately.
    pub fn emit(&mut self, event: ArchiveEvent, title: impl Into<String>) {
        self.event_emitter.emit(event.as_str(), title.into());
    }

    /// Emit all queued events in the order they were recorded.
    pub fn emit_queued(&mut self) {
        let events: Vec<_> = self.events_to_emit.drain(..).collect();
        for (event, title) in events {
            self.emit(event, title);
        }
    }

    pub fn queued_len(&self) -> usize {
        self.events_to_emit.len()
    }
}

/// Wrap an archive with emitter capabilities.
pub trait EmittableArchive {
    fn with_emitter(self) -> ArchiveEmitter;
}

impl EmittableArchive for Archive {
    fn with_emitter(self) -> ArchiveEmitter {
        ArchiveEmitter::new(self)
    }
}
