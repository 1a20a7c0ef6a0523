//! The viewer: session state, data layout and a display surface.

use log::{info, warn};

use shared::{DataLayout, DatasetIndex, Direction};

use crate::compose::{compose_frame, RenderReport};
use crate::session::ViewerSession;
use crate::{DisplaySurface, ViewerConfig, ViewerError};

/// Interactive comparison of the three sources for one sample at a time.
pub struct ComparisonViewer<S: DisplaySurface> {
    layout: DataLayout,
    config: ViewerConfig,
    session: ViewerSession,
    surface: S,
    last_report: Option<RenderReport>,
}

impl<S: DisplaySurface> ComparisonViewer<S> {
    /// Start a session on the first sample and show it on `surface`.
    ///
    /// Artifact directories missing under the data root are reported once
    /// here; individual missing files are handled per render.
    pub fn initialize(
        layout: DataLayout,
        config: ViewerConfig,
        surface: S,
    ) -> Result<Self, ViewerError> {
        for (kind, dir) in layout.missing_directories() {
            warn!("{} directory not found: {}", kind.label(), dir.display());
        }

        let session = ViewerSession::new(config.dataset_len)?;
        let first = session.current();
        let mut viewer = Self {
            layout,
            config,
            session,
            surface,
            last_report: None,
        };
        viewer.render(first)?;
        Ok(viewer)
    }

    /// Step to the neighbouring sample and render it.
    pub fn navigate(&mut self, direction: Direction) -> Result<&RenderReport, ViewerError> {
        let target = self.session.target(direction);
        self.render(target)
    }

    /// Rebuild the frame of `index` from disk, present it and make it current.
    ///
    /// Load problems are logged and show up as blank panels. An index built
    /// for another dataset length is rejected when it falls outside this
    /// dataset. A failing display surface leaves the session on the frame
    /// that is still on screen.
    pub fn render(&mut self, index: DatasetIndex) -> Result<&RenderReport, ViewerError> {
        let index = DatasetIndex::new(index.get(), self.config.dataset_len)?;

        self.session.begin_render();
        info!("Rendering sample {index}");

        let report = compose_frame(&self.layout, &self.config, index);
        for warning in &report.warnings {
            warn!("{warning}");
        }

        let presented = self.surface.present(&report.frame);
        self.session.finish_render();
        presented?;

        self.session.commit(index);
        Ok(&*self.last_report.insert(report))
    }

    /// Show the last frame again without touching the data.
    pub fn refresh(&mut self) -> Result<(), ViewerError> {
        self.surface.refresh()
    }

    pub fn session(&self) -> &ViewerSession {
        &self.session
    }

    pub fn last_report(&self) -> Option<&RenderReport> {
        self.last_report.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
