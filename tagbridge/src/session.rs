// tagbridge/src/session.rs

//! Cached reader session.

use crate::driver::{ReaderDriver, SessionFactory, SessionMode};

/// Holds zero or one live headless session.
///
/// Tag data has to survive between separate script calls (read now, save
/// later), so the session is cached here until `release` is called or the
/// manager is dropped. This is a cached handle, not a pool.
pub struct SessionManager {
    factory: Box<dyn SessionFactory>,
    session: Option<Box<dyn ReaderDriver>>,
    opened: usize,
}

impl SessionManager {
    /// Manager with no live session. Nothing is opened until `acquire`.
    pub fn new(factory: Box<dyn SessionFactory>) -> Self {
        Self {
            factory,
            session: None,
            opened: 0,
        }
    }

    /// Return the cached session, opening one first if none is live.
    pub fn acquire(&mut self) -> &mut dyn ReaderDriver {
        if self.session.is_none() {
            log::debug!("opening cached headless reader session");
            self.opened += 1;
        }
        let factory = &self.factory;
        self.session
            .get_or_insert_with(|| factory.open(SessionMode::Headless))
            .as_mut()
    }

    /// Drop the cached session. Returns whether there was one; releasing
    /// with nothing cached is a no-op.
    pub fn release(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                drop(session);
                log::debug!("released cached reader session");
                true
            }
            None => false,
        }
    }

    /// A fresh headless session that is never cached. Dropping it frees it.
    pub fn open_disposable(&mut self) -> Box<dyn ReaderDriver> {
        log::debug!("opening disposable headless reader session");
        self.opened += 1;
        self.factory.open(SessionMode::Headless)
    }

    /// Whether a cached session is open.
    pub fn is_live(&self) -> bool {
        self.session.is_some()
    }

    /// Sessions opened by this manager so far, cached and disposable.
    pub fn sessions_opened(&self) -> usize {
        self.opened
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("live", &self.is_live())
            .field("opened", &self.opened)
            .finish()
    }
}
