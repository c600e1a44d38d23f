/// At most one current result; installing a new one releases the previous.
#[derive(Debug)]
pub struct ActiveResult<T> {
    current: Option<T>,
    generation: u64,
}

impl<T> Default for ActiveResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ActiveResult<T> {
    pub fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    pub fn replace(&mut self, next: T) -> Option<T> {
        let previous = self.current.take();
        self.current = Some(next);
        self.generation += 1;
        previous
    }

    pub fn replace_with<E>(&mut self, build: impl FnOnce() -> Result<T, E>) -> Result<Option<T>, E> {
        let next = build()?;
        Ok(self.replace(next))
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn take(&mut self) -> Option<T> {
        self.current.take()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlannerError, SipResult, calculate_sip};
    use std::cell::Cell;
    use std::rc::Rc;

    struct Tracked {
        drops: Rc<Cell<u32>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn replacing_releases_the_previous_result() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = ActiveResult::new();
        assert!(slot.is_empty());

        slot.replace(Tracked {
            drops: drops.clone(),
        });
        assert_eq!(drops.get(), 0);

        let released = slot.replace(Tracked {
            drops: drops.clone(),
        });
        assert!(released.is_some());
        drop(released);
        assert_eq!(drops.get(), 1);
        assert_eq!(slot.generation(), 2);

        slot.clear();
        assert_eq!(drops.get(), 2);
        assert!(slot.is_empty());
    }

    #[test]
    fn failed_rebuild_keeps_the_current_result() {
        let mut slot: ActiveResult<SipResult> = ActiveResult::default();
        slot.replace_with(|| calculate_sip(5_000.0, 0.12, 10))
            .expect("valid SIP");
        let before = slot.current().map(|r| r.final_value);

        let err: PlannerError = slot
            .replace_with(|| calculate_sip(5_000.0, 0.12, 0))
            .expect_err("invalid horizon");
        assert_eq!(err.field(), Some("years"));
        assert_eq!(slot.current().map(|r| r.final_value), before);
        assert_eq!(slot.generation(), 1);

        let taken = slot.take().expect("result present");
        assert_eq!(taken.months, 120);
        assert!(slot.is_empty());
    }
}
