//! Pose labels and classification results
//!
//! Each pose pairs a hand gesture with a facial expression. The UI strings
//! here back the hint pills and the capture popup on the JS side.

/// Pose keys in hint-pill order
pub const POSE_LABELS: [PoseLabel; 5] = [
    PoseLabel::Surprised,
    PoseLabel::Thinking,
    PoseLabel::Wink,
    PoseLabel::HeartTouch,
    PoseLabel::Idea,
];

/// Recognised poses. Absence of a pose is `Option::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoseLabel {
    /// One finger on the lip
    Thinking,
    /// One finger on the lip while winking
    Wink,
    /// Pointer finger up beside the face with an open-mouth smile
    Idea,
    /// Hands together at the chest, mouth open
    Surprised,
    /// Hands together at the chest, closed smile
    HeartTouch,
}

impl PoseLabel {
    /// Stable key shared with the JS side
    pub fn as_str(&self) -> &'static str {
        match self {
            PoseLabel::Thinking => "thinking",
            PoseLabel::Wink => "wink",
            PoseLabel::Idea => "idea",
            PoseLabel::Surprised => "surprised",
            PoseLabel::HeartTouch => "hearttouch",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        POSE_LABELS.iter().copied().find(|p| p.as_str() == key)
    }

    /// Popup title
    pub fn title(&self) -> &'static str {
        "is this u?"
    }

    /// Popup caption
    pub fn caption(&self) -> &'static str {
        match self {
            PoseLabel::Thinking => "what's got u thinkin so hard",
            PoseLabel::Wink => "ok chill out now",
            PoseLabel::Idea => "an idea? tell me more!!",
            PoseLabel::Surprised => "why so shocked?",
            PoseLabel::HeartTouch => "ur so sweet *wipes a tear*",
        }
    }

    /// How to strike the pose
    pub fn hint(&self) -> &'static str {
        match self {
            PoseLabel::Thinking => "Finger on lip/chin",
            PoseLabel::Wink => "Finger on lip/chin & wink",
            PoseLabel::Idea => "Pointer up & open-mouth smile",
            PoseLabel::Surprised => "Hands clasped at chest & mouth open",
            PoseLabel::HeartTouch => "Hands at chest & smile",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PoseLabel::Thinking => "\u{1F914}",
            PoseLabel::Wink => "\u{1F609}",
            PoseLabel::Idea => "\u{1F4A1}",
            PoseLabel::Surprised => "\u{1F631}",
            PoseLabel::HeartTouch => "\u{1F970}",
        }
    }

    /// DOM id of the hint pill
    pub fn hint_id(&self) -> &'static str {
        match self {
            PoseLabel::Thinking => "hint-thinking",
            PoseLabel::Wink => "hint-wink",
            PoseLabel::Idea => "hint-idea",
            PoseLabel::Surprised => "hint-surprised",
            PoseLabel::HeartTouch => "hint-hearttouch",
        }
    }
}

/// Advisory shown when the hands are right but the face is not
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoseWarning {
    pub message: &'static str,
    /// Pose the user is most likely reaching for
    pub hint_pose: Option<PoseLabel>,
}

/// Output of one classification pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub pose: Option<PoseLabel>,
    pub warning: Option<PoseWarning>,
}

impl ClassificationResult {
    /// No pose, no advice
    pub fn none() -> Self {
        Self::default()
    }

    pub fn pose(pose: PoseLabel) -> Self {
        Self { pose: Some(pose), warning: None }
    }

    pub fn warn(message: &'static str, hint_pose: PoseLabel) -> Self {
        Self {
            pose: None,
            warning: Some(PoseWarning { message, hint_pose: Some(hint_pose) }),
        }
    }

    /// Pose whose hint pill should show the warning state
    pub fn warn_pose(&self) -> Option<PoseLabel> {
        self.warning.as_ref().and_then(|w| w.hint_pose)
    }
}
