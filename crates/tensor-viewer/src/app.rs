use crate::{
    controls::ControlState,
    data::{present, types::RenderPrimitives},
    loader::{FsLoader, TextLoader},
    render::SceneSink,
    session::Session,
};
use anyhow::{Context, Result};
use std::path::Path;

pub struct App<L: TextLoader = FsLoader> {
    pub loader: L,
    pub session: Session,
    pub controls: ControlState,
    primitives: Option<RenderPrimitives>,
}

impl<L: TextLoader> App<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            session: Session::new(),
            controls: ControlState::new(),
            primitives: None,
        }
    }

    /// Primitives of the dataset currently on screen, if any.
    pub fn primitives(&self) -> Option<&RenderPrimitives> {
        self.primitives.as_ref()
    }

    /// Load `path`, prepare it, and hand it to `sink`.
    ///
    /// The session and the stored primitives only change once the sink has
    /// accepted the new scene. A load, parse or submit failure leaves the
    /// previously shown dataset current.
    pub async fn open<S: SceneSink>(&mut self, path: &Path, sink: &mut S) -> Result<&RenderPrimitives> {
        let dataset = Session::fetch(&self.loader, path).await?;

        if dataset.has_higher_modes() {
            log::info!(
                "{}: showing modes 1-3 of {}",
                path.display(),
                dataset.mode_count()
            );
        }

        let primitives = present(&dataset);
        sink.submit(&primitives)
            .with_context(|| format!("Failed to submit {} to the scene", path.display()))?;

        self.session.replace(dataset);
        Ok(&*self.primitives.insert(primitives))
    }

    /// Forward a key press to the transform controls.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.controls.on_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::TransformMode;
    use crate::render::JsonScene;
    use std::io::Write;

    #[tokio::test]
    async fn open_presents_and_submits() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0 0 0 1.5\n1 1 1 2.5\n").unwrap();

        let mut app = App::new(FsLoader);
        let mut scene = JsonScene::default();
        let prims = app.open(file.path(), &mut scene).await.unwrap();

        assert_eq!(prims.positions(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert!(prims.bounds.is_some());
        assert_eq!(app.session.generation(), 1);
    }

    #[tokio::test]
    async fn failed_open_keeps_previous_scene() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.tns");
        let bad = dir.path().join("bad.tns");
        std::fs::write(&good, "2 3 4 9 0.1\n").unwrap();
        std::fs::write(&bad, "a b c 1\n").unwrap();

        let mut app = App::new(FsLoader);
        let mut scene = JsonScene::default();
        app.open(&good, &mut scene).await.unwrap();
        let before = app.primitives().cloned();

        assert!(app.open(&bad, &mut scene).await.is_err());
        assert!(app.open(&dir.path().join("absent.tns"), &mut scene).await.is_err());

        assert_eq!(app.primitives().cloned(), before);
        assert_eq!(
            app.session.current().map(|d| d.vertices().to_vec()),
            Some(vec![[2.0, 3.0, 4.0]])
        );
    }

    /// Rejects every scene.
    struct FailingSink;

    impl SceneSink for FailingSink {
        fn show_points(&mut self, _: &RenderPrimitives) -> Result<()> {
            anyhow::bail!("scene unavailable")
        }

        fn show_bounds(&mut self, _: &crate::data::BoundingBox) -> Result<()> {
            anyhow::bail!("scene unavailable")
        }
    }

    #[tokio::test]
    async fn rejected_submit_keeps_previous_dataset_and_scene() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.tns");
        let second = dir.path().join("b.tns");
        std::fs::write(&first, "0 0 0 1\n").unwrap();
        std::fs::write(&second, "5 5 5 1\n").unwrap();

        let mut app = App::new(FsLoader);
        app.open(&first, &mut JsonScene::default()).await.unwrap();

        let err = app.open(&second, &mut FailingSink).await.unwrap_err();
        assert!(format!("{err:#}").contains("scene unavailable"));

        assert_eq!(
            app.session.current().map(|d| d.vertices().to_vec()),
            Some(vec![[0.0, 0.0, 0.0]])
        );
        assert_eq!(
            app.primitives().map(|p| p.positions().to_vec()),
            Some(vec![0.0, 0.0, 0.0])
        );
        assert_eq!(app.session.generation(), 1);
    }

    #[test]
    fn keys_reach_controls() {
        let mut app = App::new(FsLoader);
        assert!(app.handle_key("r"));
        assert!(!app.handle_key("q"));
        assert_eq!(app.controls.mode(), TransformMode::Rotate);
    }
}
