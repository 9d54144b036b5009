//! Render layer tags.
//!
//! Every renderable carries exactly one tag, and each scene pass camera
//! filters on exactly one tag, so the three channels of the composite never
//! see each other's geometry. Post-process quads live on dedicated 2D layers
//! for the same reason.

use bevy::render::view::RenderLayers;

/// Visibility group for a renderable object.
///
/// `Base` holds reference geometry, `Bloom` holds glow sources (stars), and
/// `Overlay` holds markers drawn on top of everything, untouched by bloom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerTag {
    Base,
    Bloom,
    Overlay,
}

impl LayerTag {
    /// Render layer index backing this tag.
    pub const fn index(self) -> usize {
        match self {
            LayerTag::Base => 0,
            LayerTag::Bloom => 1,
            LayerTag::Overlay => 2,
        }
    }

    /// Layer mask attached to both the tagged objects and the matching
    /// scene pass camera.
    pub fn render_layers(self) -> RenderLayers {
        RenderLayers::layer(self.index())
    }
}

// Isolation layers for the fullscreen post-process quads. Each quad is only
// visible to the one 2D camera that drives its pass.
pub const BRIGHT_PASS_LAYER: usize = 8;
pub const BLUR_H_PASS_LAYER: usize = 9;
pub const BLUR_V_PASS_LAYER: usize = 10;
pub const COMPOSITE_PASS_LAYER: usize = 11;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_tags_are_mutually_disjoint() {
        let tags = [LayerTag::Base, LayerTag::Bloom, LayerTag::Overlay];
        for a in tags {
            for b in tags {
                let shared = a.render_layers().intersects(&b.render_layers());
                assert_eq!(shared, a == b, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn post_pass_layers_do_not_collide_with_scene_tags() {
        let post = [
            BRIGHT_PASS_LAYER,
            BLUR_H_PASS_LAYER,
            BLUR_V_PASS_LAYER,
            COMPOSITE_PASS_LAYER,
        ];
        for layer in post {
            for tag in [LayerTag::Base, LayerTag::Bloom, LayerTag::Overlay] {
                assert_ne!(layer, tag.index());
            }
        }
    }
}
