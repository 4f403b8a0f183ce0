// Skill bars fill to their `data-width` one after another, the first time the
// skills section comes into view.

pub const SECTION_SELECTOR: &str = ".skills";
pub const BAR_SELECTOR: &str = ".skill-progress";
pub const WIDTH_ATTRIBUTE: &str = "data-width";
pub const STAGGER_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarFill {
    pub index: usize,
    pub delay_ms: u32,
    pub width: String,
}

/// One timed fill per bar, `STAGGER_MS` apart. Bars without a width keep
/// their slot in the stagger but get no fill.
pub fn fill_schedule<I>(widths: I) -> Vec<BarFill>
where
    I: IntoIterator<Item = Option<String>>,
{
    widths
        .into_iter()
        .enumerate()
        .filter_map(|(index, width)| {
            width.map(|width| BarFill {
                index,
                delay_ms: index as u32 * STAGGER_MS,
                width,
            })
        })
        .collect()
}

/// Latch so the fill runs once per page, however often the section
/// scrolls back into view.
#[derive(Copy, Clone, Debug, Default)]
pub struct SkillsTrigger {
    fired: bool,
}

impl SkillsTrigger {
    pub fn on_visibility(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_fill_a_tenth_of_a_second_apart() {
        let schedule = fill_schedule(vec![Some("90%".to_owned()), Some("75%".to_owned())]);
        assert_eq!(
            schedule,
            vec![
                BarFill { index: 0, delay_ms: 0, width: "90%".into() },
                BarFill { index: 1, delay_ms: 100, width: "75%".into() },
            ]
        );
    }

    #[test]
    fn bars_without_width_keep_their_slot() {
        let schedule = fill_schedule(vec![None, Some("60%".to_owned())]);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].index, 1);
        assert_eq!(schedule[0].delay_ms, 100);
    }

    #[test]
    fn fill_fires_once() {
        let mut trigger = SkillsTrigger::default();
        assert!(!trigger.on_visibility(false));
        assert!(trigger.on_visibility(true));
        assert!(!trigger.on_visibility(false));
        assert!(!trigger.on_visibility(true));
    }
}
