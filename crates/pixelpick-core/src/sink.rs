//! Change notification
//!
//! After every committed paint the full cell map is handed to a
//! [`ChangeSink`]: either a callback that borrows the cells, or a
//! [`MirrorTarget`] that keeps the JSON form of the map, the way a hidden form
//! field would.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cell::Cell;
use crate::error::Result;

/// Callback invoked with the current cell map
pub type UpdateCallback = Box<dyn FnMut(&[Cell])>;

/// Consumer of cell map updates
pub enum ChangeSink {
    /// Hand the cells to a closure
    Callback(UpdateCallback),
    /// Store the serialized cells in a shared slot
    Mirror(MirrorTarget),
}

impl ChangeSink {
    pub fn callback<F>(f: F) -> Self
    where
        F: FnMut(&[Cell]) + 'static,
    {
        ChangeSink::Callback(Box::new(f))
    }

    pub fn mirror(target: &MirrorTarget) -> Self {
        ChangeSink::Mirror(target.clone())
    }

    /// Deliver the current map
    pub fn notify(&mut self, cells: &[Cell]) -> Result<()> {
        match self {
            ChangeSink::Callback(callback) => callback(cells),
            ChangeSink::Mirror(target) => target.store(cells)?,
        }
        Ok(())
    }
}

impl fmt::Debug for ChangeSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeSink::Callback(_) => f.write_str("ChangeSink::Callback"),
            ChangeSink::Mirror(target) => f.debug_tuple("ChangeSink::Mirror").field(target).finish(),
        }
    }
}

/// Shared slot holding the latest JSON cell map.
///
/// Clones share the same slot; the editor writes, the host reads.
#[derive(Debug, Clone, Default)]
pub struct MirrorTarget {
    value: Rc<RefCell<String>>,
}

impl MirrorTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last stored JSON, empty before the first paint
    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    /// Parse the stored JSON back into cells
    pub fn cells(&self) -> Result<Vec<Cell>> {
        Ok(serde_json::from_str(&self.value.borrow())?)
    }

    fn store(&self, cells: &[Cell]) -> Result<()> {
        let json = serde_json::to_string(cells)?;
        *self.value.borrow_mut() = json;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use pretty_assertions::assert_eq;

    fn cells() -> Vec<Cell> {
        vec![
            Cell::new(0.5, 0.5, 20, Rgb::WHITE),
            Cell::new(0.5, 20.5, 20, Rgb::new(255, 0, 0)),
        ]
    }

    #[test]
    fn test_callback_receives_cells() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let captured = Rc::clone(&seen);
        let mut sink = ChangeSink::callback(move |cells| {
            captured.borrow_mut().push(cells.len());
        });

        sink.notify(&cells()).unwrap();
        sink.notify(&cells()[..1]).unwrap();
        assert_eq!(*seen.borrow(), vec![2, 1]);
    }

    #[test]
    fn test_mirror_stores_json() {
        let target = MirrorTarget::new();
        assert_eq!(target.value(), "");

        let mut sink = ChangeSink::mirror(&target);
        sink.notify(&cells()).unwrap();

        assert_eq!(
            target.value(),
            r#"[{"x":0.5,"y":0.5,"width":20,"height":20,"color":[255,255,255]},{"x":0.5,"y":20.5,"width":20,"height":20,"color":[255,0,0]}]"#
        );
        assert_eq!(target.cells().unwrap(), cells());
    }
}
