//! Bookkeeping for the chart widget container.
//!
//! The widget owns DOM outside of the component tree, so every prop change
//! tears the previous instance down before mounting again. [`WidgetSlot`]
//! decides what to clear and whether to mount; the UI crate performs the
//! DOM calls.

/// A mount request for the widget factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetMount {
    pub pair_address: String,
    pub container_id: String,
}

/// What to do for one update of the widget props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotPlan {
    /// Containers to empty, in order, before mounting.
    pub clear: Vec<String>,
    pub mount: Option<WidgetMount>,
}

/// Tracks the container the widget is currently mounted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetSlot {
    mounted: Option<String>,
}

impl WidgetSlot {
    pub fn mounted(&self) -> Option<&str> {
        self.mounted.as_deref()
    }

    /// Plan for new props. The previous container and the target container
    /// are always cleared; a mount is requested only once the script is
    /// loaded and a pool address is known.
    pub fn update(&mut self, pair_address: &str, container_id: &str, script_loaded: bool) -> SlotPlan {
        let mut clear: Vec<String> = self.mounted.take().into_iter().collect();
        if !clear.iter().any(|c| c == container_id) {
            clear.push(container_id.to_string());
        }

        let mount = (script_loaded && !pair_address.is_empty()).then(|| WidgetMount {
            pair_address: pair_address.to_string(),
            container_id: container_id.to_string(),
        });
        if mount.is_some() {
            self.mounted = Some(container_id.to_string());
        }
        SlotPlan { clear, mount }
    }

    /// Container to clear when the component unmounts.
    pub fn release(&mut self) -> Option<String> {
        self.mounted.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount(pair: &str, container: &str) -> Option<WidgetMount> {
        Some(WidgetMount {
            pair_address: pair.into(),
            container_id: container.into(),
        })
    }

    #[test]
    fn waits_for_script_before_mounting() {
        let mut slot = WidgetSlot::default();
        let plan = slot.update("PoolA", "moralis-chart-0", false);
        assert_eq!(plan.clear, vec!["moralis-chart-0"]);
        assert_eq!(plan.mount, None);
        assert_eq!(slot.mounted(), None);

        let plan = slot.update("PoolA", "moralis-chart-0", true);
        assert_eq!(plan.clear, vec!["moralis-chart-0"]);
        assert_eq!(plan.mount, mount("PoolA", "moralis-chart-0"));
        assert_eq!(slot.mounted(), Some("moralis-chart-0"));
    }

    #[test]
    fn pair_change_clears_then_remounts_same_container() {
        let mut slot = WidgetSlot::default();
        slot.update("PoolA", "moralis-chart-0", true);

        let plan = slot.update("PoolB", "moralis-chart-0", true);
        assert_eq!(plan.clear, vec!["moralis-chart-0"]);
        assert_eq!(plan.mount, mount("PoolB", "moralis-chart-0"));
    }

    #[test]
    fn container_change_clears_old_and_new() {
        let mut slot = WidgetSlot::default();
        slot.update("PoolA", "moralis-chart-0", true);

        let plan = slot.update("PoolC", "moralis-chart-1", true);
        assert_eq!(plan.clear, vec!["moralis-chart-0", "moralis-chart-1"]);
        assert_eq!(plan.mount, mount("PoolC", "moralis-chart-1"));
        assert_eq!(slot.mounted(), Some("moralis-chart-1"));
    }

    #[test]
    fn empty_pair_tears_down_without_mounting() {
        let mut slot = WidgetSlot::default();
        slot.update("PoolA", "moralis-chart-0", true);

        let plan = slot.update("", "moralis-chart-0", true);
        assert_eq!(plan.clear, vec!["moralis-chart-0"]);
        assert_eq!(plan.mount, None);
        assert_eq!(slot.release(), None);
    }

    #[test]
    fn release_clears_mounted_container_once() {
        let mut slot = WidgetSlot::default();
        assert_eq!(slot.release(), None);

        slot.update("PoolA", "moralis-chart-2", true);
        assert_eq!(slot.release().as_deref(), Some("moralis-chart-2"));
        assert_eq!(slot.release(), None);
    }
}
