use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::Rect;

/// User info key for the panel frame at the start of its transition (screen coordinates).
pub const FRAME_BEGIN_KEY: &str = "panel.frame.begin";
/// User info key for the panel frame at the end of its transition (screen coordinates).
pub const FRAME_END_KEY: &str = "panel.frame.end";
/// User info key for the transition duration, in seconds.
pub const ANIMATION_DURATION_KEY: &str = "panel.animation.duration";
/// User info key telling whether the panel belongs to the current application.
pub const IS_LOCAL_KEY: &str = "panel.is_local";

/// Lifecycle signals an input panel (on-screen keyboard) goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelSignal {
    WillShow,
    DidShow,
    WillHide,
    DidHide,
    WillChangeFrame,
    DidChangeFrame,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoValue {
    Rect(Rect),
    Number(f64),
    Bool(bool),
}

pub type UserInfo = BTreeMap<String, InfoValue>;

/// A posted panel signal and its (possibly absent) payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputPanelEvent {
    pub signal: PanelSignal,
    pub user_info: Option<UserInfo>,
}

impl InputPanelEvent {
    pub fn new(signal: PanelSignal) -> Self {
        Self {
            signal,
            user_info: None,
        }
    }

    pub fn with_info(mut self, key: impl Into<String>, value: InfoValue) -> Self {
        self.user_info
            .get_or_insert_with(UserInfo::new)
            .insert(key.into(), value);
        self
    }

    pub fn with_begin_frame(self, frame: Rect) -> Self {
        self.with_info(FRAME_BEGIN_KEY, InfoValue::Rect(frame))
    }

    pub fn with_end_frame(self, frame: Rect) -> Self {
        self.with_info(FRAME_END_KEY, InfoValue::Rect(frame))
    }

    pub fn with_animation_duration(self, seconds: f64) -> Self {
        self.with_info(ANIMATION_DURATION_KEY, InfoValue::Number(seconds))
    }

    pub fn with_is_local(self, is_local: bool) -> Self {
        self.with_info(IS_LOCAL_KEY, InfoValue::Bool(is_local))
    }

    pub fn info(&self, key: &str) -> Option<&InfoValue> {
        self.user_info.as_ref()?.get(key)
    }

    /// The panel's end-state frame.
    ///
    /// Returns `None` if there is no user info, the key is missing, or the value is not a rect.
    pub fn end_frame(&self) -> Option<Rect> {
        self.rect(FRAME_END_KEY)
    }

    pub fn begin_frame(&self) -> Option<Rect> {
        self.rect(FRAME_BEGIN_KEY)
    }

    pub fn animation_duration(&self) -> Option<f64> {
        match self.info(ANIMATION_DURATION_KEY)? {
            InfoValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_local(&self) -> Option<bool> {
        match self.info(IS_LOCAL_KEY)? {
            InfoValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn rect(&self, key: &str) -> Option<Rect> {
        match self.info(key)? {
            InfoValue::Rect(r) => Some(*r),
            _ => None,
        }
    }
}
