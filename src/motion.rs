//! Cosmetic motion: looping background blobs and hover transforms.

/// A blurred colour blob drifting through three keyframes forever,
/// playing alternately forwards and backwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    pub name: &'static str,
    pub color: &'static str,
    pub placement: &'static str,
    pub x: [f64; 3],
    pub y: [f64; 3],
    pub duration_secs: f64,
}

pub const BLOBS: [Blob; 3] = [
    Blob {
        name: "blob-purple",
        color: "#7e22ce",
        placement: "top: 0; left: -5rem;",
        x: [0.0, 50.0, 0.0],
        y: [0.0, 30.0, 0.0],
        duration_secs: 10.0,
    },
    Blob {
        name: "blob-blue",
        color: "#1d4ed8",
        placement: "top: 2.5rem; right: -5rem;",
        x: [0.0, -50.0, 0.0],
        y: [0.0, 20.0, 0.0],
        duration_secs: 12.0,
    },
    Blob {
        name: "blob-indigo",
        color: "#4338ca",
        placement: "bottom: 0; left: 33.333%;",
        x: [0.0, 30.0, 0.0],
        y: [0.0, -20.0, 0.0],
        duration_secs: 14.0,
    },
];

impl Blob {
    pub fn keyframes(&self) -> String {
        let stops = ["0%", "50%", "100%"];
        let frames: String = stops
            .iter()
            .zip(self.x.iter().zip(self.y.iter()))
            .map(|(stop, (x, y))| format!("{} {{ transform: translate({}px, {}px); }} ", stop, x, y))
            .collect();
        format!("@keyframes {} {{ {}}}", self.name, frames)
    }

    pub fn animation(&self) -> String {
        format!(
            "animation: {} {}s ease-in-out infinite alternate;",
            self.name, self.duration_secs
        )
    }

    pub fn style(&self) -> String {
        format!("{} background-color: {}; {}", self.placement, self.color, self.animation())
    }
}

/// Transform and glow applied while the pointer is over an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverEffect {
    pub scale: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub perspective_px: Option<f64>,
    pub box_shadow: Option<&'static str>,
    pub text_shadow: Option<&'static str>,
    pub transition: &'static str,
}

const GLOW: &str = "0 0 20px #7f5af0";

pub const LOGO_TILT: HoverEffect = HoverEffect {
    scale: 1.1,
    rotate_x_deg: 10.0,
    rotate_y_deg: 20.0,
    perspective_px: Some(600.0),
    box_shadow: None,
    text_shadow: None,
    // overshooting curve stands in for a stiff spring
    transition: "transform 0.35s cubic-bezier(0.34, 1.56, 0.64, 1)",
};

pub const BUTTON_GLOW: HoverEffect = HoverEffect {
    scale: 1.1,
    rotate_x_deg: 0.0,
    rotate_y_deg: 0.0,
    perspective_px: None,
    box_shadow: Some(GLOW),
    text_shadow: Some("0 0 8px #9f7aea"),
    transition: "all 0.3s ease",
};

pub const SUBMIT_GLOW: HoverEffect = HoverEffect {
    scale: 1.05,
    ..BUTTON_GLOW
};

pub const CARD_LIFT: HoverEffect = HoverEffect {
    scale: 1.05,
    rotate_x_deg: 0.0,
    rotate_y_deg: 0.0,
    perspective_px: None,
    box_shadow: Some(GLOW),
    text_shadow: Some("0 0 5px #d8b4fe"),
    transition: "all 0.3s ease",
};

impl HoverEffect {
    pub fn style(&self, hovered: bool) -> String {
        let perspective = self
            .perspective_px
            .map(|p| format!("perspective({}px) ", p))
            .unwrap_or_default();

        let mut style = format!("transition: {};", self.transition);
        if !hovered {
            style.push_str(&format!(" transform: {}rotateX(0deg) rotateY(0deg) scale(1);", perspective));
            return style;
        }

        style.push_str(&format!(
            " transform: {}rotateX({}deg) rotateY({}deg) scale({});",
            perspective, self.rotate_x_deg, self.rotate_y_deg, self.scale
        ));
        if let Some(shadow) = self.box_shadow {
            style.push_str(&format!(" box-shadow: {};", shadow));
        }
        if let Some(shadow) = self.text_shadow {
            style.push_str(&format!(" text-shadow: {};", shadow));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blobs_loop_forever_in_both_directions() {
        let durations: Vec<_> = BLOBS.iter().map(|b| b.duration_secs).collect();
        assert_eq!(durations, [10.0, 12.0, 14.0]);
        for blob in BLOBS.iter() {
            assert!(blob.animation().ends_with("infinite alternate;"));
            assert_eq!(blob.x[0], blob.x[2]);
            assert_eq!(blob.y[0], blob.y[2]);
        }
    }

    #[test]
    fn blob_keyframes_follow_offsets() {
        let frames = BLOBS[1].keyframes();
        assert!(frames.starts_with("@keyframes blob-blue {"));
        assert!(frames.contains("50% { transform: translate(-50px, 20px); }"));
        assert!(frames.contains("100% { transform: translate(0px, 0px); }"));
    }

    #[test]
    fn hover_reverts_when_pointer_leaves() {
        let resting = CARD_LIFT.style(false);
        assert!(resting.contains("scale(1);"));
        assert!(!resting.contains("box-shadow"));

        let hovered = CARD_LIFT.style(true);
        assert!(hovered.contains("scale(1.05)"));
        assert!(hovered.contains("box-shadow: 0 0 20px #7f5af0;"));
        assert!(hovered.contains("text-shadow: 0 0 5px #d8b4fe;"));
    }

    #[test]
    fn logo_tilts_in_perspective() {
        let hovered = LOGO_TILT.style(true);
        assert!(hovered.contains("perspective(600px) rotateX(10deg) rotateY(20deg) scale(1.1)"));
        assert!(LOGO_TILT.style(false).contains("perspective(600px) rotateX(0deg)"));
    }

    #[test]
    fn submit_glow_is_a_smaller_button_glow() {
        assert_eq!(SUBMIT_GLOW.scale, 1.05);
        assert_eq!(SUBMIT_GLOW.box_shadow, BUTTON_GLOW.box_shadow);
    }
}
