//! Per-platform window decoration and close behavior, expressed as lookup
//! tables so the rules can be checked without a window.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub(crate) fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    pub(crate) fn has_dock(self) -> bool {
        self == Self::MacOs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChromeStyle {
    /// Platform default frame and title bar.
    Native,
    /// Traffic lights drawn over the content, title text hidden.
    HiddenInset,
    /// No native frame at all; the content draws its own title bar.
    Frameless,
}

impl ChromeStyle {
    pub(crate) fn decorations(self) -> bool {
        self != Self::Frameless
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseAction {
    Minimize,
    Hide { hide_dock_icon: bool },
}

pub(crate) fn chrome_for_platform(platform: Platform, force_borderless: bool) -> ChromeStyle {
    match (platform, force_borderless) {
        (Platform::MacOs, _) => ChromeStyle::HiddenInset,
        (_, true) => ChromeStyle::Frameless,
        (_, false) => ChromeStyle::Native,
    }
}

pub(crate) fn close_action_for_platform(platform: Platform) -> CloseAction {
    match platform {
        Platform::Windows => CloseAction::Minimize,
        other => CloseAction::Hide {
            hide_dock_icon: other.has_dock(),
        },
    }
}
