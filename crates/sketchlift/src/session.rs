//! Conversion session: the owner of the mutable view state.

use sketchlift_extrude::ExtrudeSettings;
use sketchlift_ink::{Drawing, RasterSnapshot};

use crate::convert::{convert_drawing, MeshBackend, SolidBackend};
use crate::model::Model;
use crate::ConvertError;

/// Receiver of converted models.
///
/// `show_model` takes the model by value: the previous model on the viewer
/// side is replaced wholesale, never mutated in place, so a concurrent
/// render loop only ever observes a complete model.
pub trait Viewer {
    /// Display `model`, replacing whatever was shown before.
    fn show_model(&mut self, model: Model);
}

/// A viewer that just stores the current model. Used by tests and the CLI.
#[derive(Debug, Default)]
pub struct HeadlessViewer {
    /// The most recently shown model.
    pub model: Option<Model>,
}

impl Viewer for HeadlessViewer {
    fn show_model(&mut self, model: Model) {
        self.model = Some(model);
    }
}

/// Owner of the conversion state: the current drawing, the current model,
/// the in-flight guard, and the optional attached viewer.
///
/// All capture, conversion and render steps share one execution context;
/// the in-flight flag enforces at most one active conversion against the
/// shared viewer. There is no queueing, timeout or cancellation - a
/// rejected request requires a fresh user-initiated one.
pub struct Session {
    drawing: Drawing,
    model: Option<Model>,
    in_flight: bool,
    viewer: Option<Box<dyn Viewer>>,
    backend: Box<dyn SolidBackend>,
    settings: ExtrudeSettings,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with the default extruder and settings and no
    /// viewer attached.
    pub fn new() -> Self {
        Self::with_backend(Box::new(MeshBackend))
    }

    /// Create a session with a custom geometry backend.
    pub fn with_backend(backend: Box<dyn SolidBackend>) -> Self {
        Self {
            drawing: Drawing::new(),
            model: None,
            in_flight: false,
            viewer: None,
            backend,
            settings: ExtrudeSettings::default(),
        }
    }

    /// Attach the viewer that converted models are handed to.
    ///
    /// A session without a viewer still converts and keeps the model;
    /// nothing crashes when no viewer is attached.
    pub fn attach_viewer(&mut self, viewer: Box<dyn Viewer>) {
        self.viewer = Some(viewer);
    }

    /// Replace the current drawing.
    pub fn set_drawing(&mut self, drawing: Drawing) {
        self.drawing = drawing;
    }

    /// The current drawing.
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// Mutable access to the current drawing (stroke capture appends here).
    pub fn drawing_mut(&mut self) -> &mut Drawing {
        &mut self.drawing
    }

    /// Drop all strokes; the drawing is rebuilt from scratch afterwards.
    pub fn clear_drawing(&mut self) {
        self.drawing.clear();
    }

    /// The model from the last successful conversion, if any.
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// Convert the current drawing and replace the displayed model.
    ///
    /// Runs to completion synchronously. On success the previous model is
    /// replaced as one atomic swap and the new model is handed to the
    /// attached viewer; on failure the previous model stays unchanged.
    ///
    /// # Errors
    ///
    /// * [`ConvertError::ConversionInFlight`] - a prior conversion is
    ///   still active; this request is a no-op
    /// * [`ConvertError::NoStrokeData`] - the drawing is empty
    /// * [`ConvertError::Geometry`] - extrusion failed
    pub fn request_convert(&mut self) -> Result<&Model, ConvertError> {
        if self.in_flight {
            return Err(ConvertError::ConversionInFlight);
        }
        self.in_flight = true;
        let result = convert_drawing(&self.drawing, self.backend.as_ref(), &self.settings);
        self.in_flight = false;

        let model = result?;
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.show_model(model.clone());
        }
        Ok(self.model.insert(model))
    }

    /// Reconstruct a model from a raster snapshot of the canvas.
    ///
    /// Reserved for a future image-based reconstruction method; always
    /// fails with [`ConvertError::ReconstructionUnimplemented`].
    pub fn reconstruct_from_raster(
        &mut self,
        _snapshot: &RasterSnapshot,
    ) -> Result<&Model, ConvertError> {
        Err(ConvertError::ReconstructionUnimplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchlift_extrude::ExtrudeError;
    use sketchlift_ink::Stroke;
    use sketchlift_mesh::TriangleMesh;
    use sketchlift_shape::PlanarPath;

    fn square_drawing() -> Drawing {
        let mut drawing = Drawing::new();
        drawing.push_stroke(Stroke::from_coords(
            "#000000",
            5.0,
            &[(100.0, 100.0), (200.0, 100.0), (200.0, 200.0), (100.0, 200.0)],
        ));
        drawing
    }

    struct FailingBackend;

    impl SolidBackend for FailingBackend {
        fn extrude(
            &self,
            _path: &PlanarPath,
            _settings: &ExtrudeSettings,
        ) -> Result<TriangleMesh, ExtrudeError> {
            Err(ExtrudeError::Triangulation)
        }
    }

    #[test]
    fn test_empty_drawing_produces_no_model() {
        let mut session = Session::new();
        let result = session.request_convert();
        assert!(matches!(result, Err(ConvertError::NoStrokeData)));
        assert!(session.model().is_none());
    }

    #[test]
    fn test_successful_convert_stores_model() {
        let mut session = Session::new();
        session.set_drawing(square_drawing());
        session.request_convert().unwrap();
        let model = session.model().unwrap();
        assert!(model.solid.is_some());
        assert_eq!(model.outlines.len(), 1);
    }

    #[test]
    fn test_model_handed_to_viewer() {
        let mut session = Session::new();
        session.attach_viewer(Box::<HeadlessViewer>::default());
        session.set_drawing(square_drawing());
        assert!(session.request_convert().is_ok());
        // Session keeps its own copy too.
        assert!(session.model().is_some());
    }

    #[test]
    fn test_in_flight_guard_rejects_second_request() {
        let mut session = Session::new();
        session.set_drawing(square_drawing());
        session.in_flight = true;
        let result = session.request_convert();
        assert!(matches!(result, Err(ConvertError::ConversionInFlight)));
        // The guarded request is a no-op: no model was committed.
        assert!(session.model().is_none());
        session.in_flight = false;
        assert!(session.request_convert().is_ok());
    }

    #[test]
    fn test_failed_convert_keeps_previous_model() {
        let mut session = Session::new();
        session.set_drawing(square_drawing());
        session.request_convert().unwrap();
        let before = session.model().cloned();

        // Swap in a failing backend while keeping the prior model.
        let mut failing = Session::with_backend(Box::new(FailingBackend));
        failing.set_drawing(square_drawing());
        failing.model = before.clone();
        let result = failing.request_convert();
        assert!(matches!(result, Err(ConvertError::Geometry(_))));
        assert_eq!(failing.model(), before.as_ref());
        // The guard is released after a failure.
        assert!(!failing.in_flight);
    }

    #[test]
    fn test_new_model_replaces_previous() {
        let mut session = Session::new();
        session.set_drawing(square_drawing());
        session.request_convert().unwrap();
        let first = session.model().cloned().unwrap();

        session.drawing_mut().push_stroke(Stroke::from_coords(
            "#ff0000",
            2.0,
            &[(300.0, 100.0), (400.0, 200.0)],
        ));
        session.request_convert().unwrap();
        let second = session.model().unwrap();
        assert_ne!(*second, first);
        assert_eq!(second.outlines.len(), 2);
    }

    #[test]
    fn test_clear_drawing() {
        let mut session = Session::new();
        session.set_drawing(square_drawing());
        session.clear_drawing();
        assert!(session.drawing().is_empty());
        assert!(matches!(
            session.request_convert(),
            Err(ConvertError::NoStrokeData)
        ));
    }

    #[test]
    fn test_raster_reconstruction_unimplemented() {
        let mut session = Session::new();
        let snapshot = RasterSnapshot {
            width: 2,
            height: 2,
            rgba: vec![0; 16],
        };
        assert!(matches!(
            session.reconstruct_from_raster(&snapshot),
            Err(ConvertError::ReconstructionUnimplemented)
        ));
    }
}
