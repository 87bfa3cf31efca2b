// Recording overlay used by the host-side tests in place of a DOM element.

#![allow(dead_code)]
use std::cell::RefCell;
use wsk_ripple::core::OverlayStyle;

#[derive(Clone, Debug, PartialEq)]
pub enum Write {
    Size(f64),
    Transform(String),
    Opacity(String),
    Animating(bool),
}

#[derive(Debug, Default)]
pub struct RecordingOverlay {
    writes: RefCell<Vec<Write>>,
}

impl RecordingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.borrow().clone()
    }

    pub fn transforms(&self) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .filter_map(|w| match w {
                Write::Transform(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn sizes(&self) -> Vec<f64> {
        self.writes
            .borrow()
            .iter()
            .filter_map(|w| match w {
                Write::Size(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn last_opacity(&self) -> Option<String> {
        self.writes.borrow().iter().rev().find_map(|w| match w {
            Write::Opacity(o) => Some(o.clone()),
            _ => None,
        })
    }

    pub fn last_animating(&self) -> Option<bool> {
        self.writes.borrow().iter().rev().find_map(|w| match w {
            Write::Animating(a) => Some(*a),
            _ => None,
        })
    }
}

impl OverlayStyle for RecordingOverlay {
    fn set_size(&self, diameter_px: f64) {
        self.writes.borrow_mut().push(Write::Size(diameter_px));
    }

    fn set_transform(&self, transform: &str) {
        self.writes
            .borrow_mut()
            .push(Write::Transform(transform.to_string()));
    }

    fn set_opacity(&self, opacity: &str) {
        self.writes
            .borrow_mut()
            .push(Write::Opacity(opacity.to_string()));
    }

    fn set_animating(&self, animating: bool) {
        self.writes.borrow_mut().push(Write::Animating(animating));
    }
}
