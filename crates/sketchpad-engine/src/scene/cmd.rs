use super::illustration::cat_face;
use super::{Scene, Shape};

/// Mutation requested by the host.
///
/// Shapes arrive fully resolved: the host has already mapped the pointer and
/// applied the brush snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    AddShape(Shape),
    /// Clears placed shapes only.
    ClearInteractive,
    /// Clears the illustration only.
    ClearIllustration,
    /// Clears both lists.
    Clear,
    /// Replaces the illustration with the cat face.
    LoadIllustration,
}

impl Scene {
    /// Applies one host command.
    pub fn apply(&mut self, cmd: SceneCommand) {
        match cmd {
            SceneCommand::AddShape(shape) => {
                log::debug!("add {} at {:?}", shape.kind().name(), shape.position());
                self.add_shape(shape);
            }
            SceneCommand::ClearInteractive => {
                log::debug!("clear {} placed shapes", self.shapes().len());
                self.clear_interactive();
            }
            SceneCommand::ClearIllustration => {
                log::debug!("clear illustration");
                self.clear_illustration();
            }
            SceneCommand::Clear => {
                log::debug!("clear scene");
                self.clear();
            }
            SceneCommand::LoadIllustration => {
                self.load_illustration(cat_face());
                log::debug!("loaded illustration ({} triangles)", self.illustration().len());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn commands_drive_scene_lists() {
        let mut scene = Scene::new();
        let shape = Shape::triangle(Vec2::zero(), Color::white(), 40.0);

        scene.apply(SceneCommand::AddShape(shape));
        scene.apply(SceneCommand::LoadIllustration);
        assert_eq!(scene.shapes(), &[shape]);
        assert_eq!(scene.illustration().len(), 25);

        scene.apply(SceneCommand::ClearIllustration);
        assert_eq!(scene.shapes().len(), 1);
        assert!(scene.illustration().is_empty());

        scene.apply(SceneCommand::LoadIllustration);
        scene.apply(SceneCommand::ClearInteractive);
        assert!(scene.shapes().is_empty());
        assert_eq!(scene.illustration().len(), 25);

        scene.apply(SceneCommand::AddShape(shape));
        scene.apply(SceneCommand::Clear);
        assert!(scene.is_empty());
    }
}
