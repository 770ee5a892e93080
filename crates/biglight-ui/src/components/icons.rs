//! Icon primitives
//!
//! Static stroke glyphs drawn in `currentColor`, so they pick up the text
//! colour of whatever contains them. No state.

use dioxus::prelude::*;

/// Left-pointing chevron (button decoration)
#[component]
pub fn ChevronLeftIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 16 16",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: "M10 12L6 8L10 4",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

/// Right-pointing chevron (button decoration)
#[component]
pub fn ChevronRightIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 16 16",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: "M6 4L10 8L6 12",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

/// Downward chevron; the Dropdown rotates it while open
#[component]
pub fn ChevronDownIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: "M6 9L12 15L18 9",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

#[component]
pub fn ClockIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            circle { cx: "12", cy: "12", r: "9" }
            path { d: "M12 7V12L15 14" }
        }
    }
}

#[component]
pub fn UserIcon(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            circle { cx: "12", cy: "8", r: "4" }
            path { d: "M4 21C4 17.134 7.582 14 12 14C16.418 14 20 17.134 20 21" }
        }
    }
}

/// X mark (close drawer, clear input)
#[component]
pub fn CloseIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: "M18 6L6 18M6 6L18 18",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

/// Checkmark shown by a successful Input
#[component]
pub fn CheckIcon(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            "aria-hidden": "true",
            path {
                d: "M20 6L9 17L4 12",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
