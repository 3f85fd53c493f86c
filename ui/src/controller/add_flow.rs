//! Add dialog state
//!
//! The dialog targets a new input either at one region or at agents
//! carrying a set of tags. The two modes are exclusive; whichever is active
//! when the user submits decides the shape of the [`AddRequest`].

use homebase_shared::{
    find_template, AssignmentTags, ExampleTemplate, Region, TagCatalog, EXAMPLE_TEMPLATES,
};

/// Targeting mode, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    #[default]
    Regional,
    Assigned,
}

impl TargetMode {
    pub const ALL: [TargetMode; 2] = [TargetMode::Regional, TargetMode::Assigned];

    pub fn label(&self) -> &'static str {
        match self {
            TargetMode::Regional => "Regional",
            TargetMode::Assigned => "Assigned",
        }
    }
}

/// Where a new input should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTarget {
    Regional { region: Region },
    Assigned { tags: AssignmentTags },
}

/// A submitted add dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub target: AddTarget,
    pub title: String,
    pub text: String,
}

/// How the add dialog was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Submitted(AddRequest),
    Cancelled,
}

/// Identifies one tag catalog fetch started by entering assigned mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRequest(u64);

/// Form state of the add dialog
#[derive(Debug, Clone, PartialEq)]
pub struct AddFlow {
    mode: TargetMode,
    tag_requests: u64,
    region: Region,
    assignment_tags: AssignmentTags,
    pending_tag_name: String,
    pending_tag_value: String,
    tag_catalog: TagCatalog,
    example: Option<&'static str>,
    title: String,
    text: String,
}

impl AddFlow {
    /// A fresh dialog: regional mode, first region, first example
    pub fn new() -> Self {
        let first = EXAMPLE_TEMPLATES.first();
        Self {
            mode: TargetMode::Regional,
            tag_requests: 0,
            region: Region::default(),
            assignment_tags: AssignmentTags::new(),
            pending_tag_name: String::new(),
            pending_tag_value: String::new(),
            tag_catalog: TagCatalog::new(),
            example: first.map(|t| t.name),
            title: String::new(),
            text: first.map(|t| t.text.to_string()).unwrap_or_default(),
        }
    }

    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    /// Switch targeting mode
    ///
    /// Returns a [`TagRequest`] when the switch enters assigned mode, in which
    /// case the caller fetches the tag catalog and hands it back through
    /// [`AddFlow::receive_tag_catalog`]. That happens on every entry.
    pub fn select_mode(&mut self, mode: TargetMode) -> Option<TagRequest> {
        let entering_assigned = mode == TargetMode::Assigned && self.mode != TargetMode::Assigned;
        self.mode = mode;
        entering_assigned.then(|| {
            self.tag_requests += 1;
            TagRequest(self.tag_requests)
        })
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn example(&self) -> Option<&'static str> {
        self.example
    }

    /// Replace the text with the named example, discarding any edits
    pub fn select_example(&mut self, name: &str) -> bool {
        match find_template(name) {
            Some(template) => {
                self.apply_example(template);
                true
            }
            None => false,
        }
    }

    fn apply_example(&mut self, template: &'static ExampleTemplate) {
        self.example = Some(template.name);
        self.text = template.text.to_string();
    }

    /// Apply a fetched catalog if it answers the latest entry into assigned mode
    ///
    /// Replies for an earlier entry, or arriving after the user left assigned
    /// mode, are dropped.
    pub fn receive_tag_catalog(&mut self, request: TagRequest, catalog: TagCatalog) -> bool {
        if self.mode != TargetMode::Assigned || request.0 != self.tag_requests {
            return false;
        }
        self.tag_catalog = catalog;
        true
    }

    pub fn assignment_tags(&self) -> &AssignmentTags {
        &self.assignment_tags
    }

    pub fn pending_tag_name(&self) -> &str {
        &self.pending_tag_name
    }

    pub fn pending_tag_value(&self) -> &str {
        &self.pending_tag_value
    }

    pub fn set_pending_tag_name(&mut self, name: impl Into<String>) {
        self.pending_tag_name = name.into();
    }

    pub fn set_pending_tag_value(&mut self, value: impl Into<String>) {
        self.pending_tag_value = value.into();
    }

    /// Move the pending pair into the tag map and clear the inputs
    ///
    /// A later pair with the same name replaces the earlier value. Nothing
    /// happens while the pending name is empty.
    pub fn add_pending_tag(&mut self) -> bool {
        if self.pending_tag_name.is_empty() {
            return false;
        }
        let name = std::mem::take(&mut self.pending_tag_name);
        let value = std::mem::take(&mut self.pending_tag_value);
        self.assignment_tags.insert(name, value);
        true
    }

    pub fn remove_tag(&mut self, name: &str) {
        self.assignment_tags.remove(name);
    }

    /// Catalog tag names not yet used in this dialog
    pub fn available_tag_names(&self) -> Vec<&str> {
        self.tag_catalog
            .keys()
            .filter(|name| !self.assignment_tags.contains_key(*name))
            .map(String::as_str)
            .collect()
    }

    /// Catalog values for the pending tag name
    pub fn suggested_values(&self) -> &[String] {
        self.tag_catalog
            .get(&self.pending_tag_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Close the dialog with a request for the active mode
    pub fn submit(self) -> AddOutcome {
        let target = match self.mode {
            TargetMode::Regional => AddTarget::Regional {
                region: self.region,
            },
            TargetMode::Assigned => AddTarget::Assigned {
                tags: self.assignment_tags,
            },
        };
        AddOutcome::Submitted(AddRequest {
            target,
            title: self.title,
            text: self.text,
        })
    }

    /// Close the dialog, dropping everything entered
    pub fn cancel(self) -> AddOutcome {
        AddOutcome::Cancelled
    }
}

impl Default for AddFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TagCatalog {
        let mut catalog = TagCatalog::new();
        catalog.insert("env".to_string(), vec!["prod".to_string(), "dev".to_string()]);
        catalog.insert("os".to_string(), vec!["linux".to_string()]);
        catalog
    }

    #[test]
    fn test_new_flow_defaults() {
        let flow = AddFlow::new();
        assert_eq!(flow.mode(), TargetMode::Regional);
        assert_eq!(flow.region(), Region::West);
        assert_eq!(flow.example(), Some(EXAMPLE_TEMPLATES[0].name));
        assert_eq!(flow.text(), EXAMPLE_TEMPLATES[0].text);
        assert!(flow.title().is_empty());
    }

    #[test]
    fn test_regional_submit_has_only_region() {
        let mut flow = AddFlow::new();
        flow.set_region(Region::Central);
        flow.set_title("web check");
        flow.set_pending_tag_name("env");
        flow.set_pending_tag_value("prod");
        flow.add_pending_tag();

        let outcome = flow.submit();
        match outcome {
            AddOutcome::Submitted(request) => {
                assert_eq!(
                    request.target,
                    AddTarget::Regional {
                        region: Region::Central
                    }
                );
                assert_eq!(request.title, "web check");
            }
            AddOutcome::Cancelled => panic!("expected a submission"),
        }
    }

    #[test]
    fn test_assigned_submit_has_only_tags() {
        let mut flow = AddFlow::new();
        flow.set_region(Region::East);
        flow.select_mode(TargetMode::Assigned);
        flow.set_pending_tag_name("env");
        flow.set_pending_tag_value("prod");
        flow.add_pending_tag();
        flow.set_title("T");
        flow.set_text("[[inputs.mem]]");

        let mut tags = AssignmentTags::new();
        tags.insert("env".to_string(), "prod".to_string());
        assert_eq!(
            flow.submit(),
            AddOutcome::Submitted(AddRequest {
                target: AddTarget::Assigned { tags },
                title: "T".to_string(),
                text: "[[inputs.mem]]".to_string(),
            })
        );
    }

    #[test]
    fn test_entering_assigned_requests_tags_each_time() {
        let mut flow = AddFlow::new();
        let first = flow.select_mode(TargetMode::Assigned);
        assert!(first.is_some());
        assert!(flow.select_mode(TargetMode::Assigned).is_none());
        assert!(flow.select_mode(TargetMode::Regional).is_none());
        let second = flow.select_mode(TargetMode::Assigned);
        assert!(second.is_some());
        assert_ne!(first, second);
    }

    #[test]
    fn test_stale_catalog_reply_is_dropped() {
        let mut flow = AddFlow::new();
        let first = flow.select_mode(TargetMode::Assigned).unwrap();
        flow.select_mode(TargetMode::Regional);
        let second = flow.select_mode(TargetMode::Assigned).unwrap();

        assert!(flow.receive_tag_catalog(second, catalog()));
        let mut older = TagCatalog::new();
        older.insert("stale".to_string(), Vec::new());
        assert!(!flow.receive_tag_catalog(first, older));

        assert_eq!(flow.available_tag_names(), vec!["env", "os"]);
    }

    #[test]
    fn test_catalog_reply_after_leaving_assigned_is_dropped() {
        let mut flow = AddFlow::new();
        let request = flow.select_mode(TargetMode::Assigned).unwrap();
        flow.select_mode(TargetMode::Regional);

        assert!(!flow.receive_tag_catalog(request, catalog()));
        assert!(flow.available_tag_names().is_empty());
    }

    #[test]
    fn test_example_replaces_edited_text() {
        let mut flow = AddFlow::new();
        flow.set_text("my careful edits");

        assert!(flow.select_example("Memory"));
        assert_eq!(flow.text(), "[[inputs.mem]]");
        assert_eq!(flow.example(), Some("Memory"));

        flow.set_text("more edits");
        assert!(flow.select_example("Memory"));
        assert_eq!(flow.text(), "[[inputs.mem]]");
    }

    #[test]
    fn test_unknown_example_keeps_text() {
        let mut flow = AddFlow::new();
        flow.set_text("kept");
        assert!(!flow.select_example("No such example"));
        assert_eq!(flow.text(), "kept");
    }

    #[test]
    fn test_adding_tag_overwrites_and_clears_pending() {
        let mut flow = AddFlow::new();
        flow.set_pending_tag_name("env");
        flow.set_pending_tag_value("dev");
        assert!(flow.add_pending_tag());
        assert!(flow.pending_tag_name().is_empty());
        assert!(flow.pending_tag_value().is_empty());

        flow.set_pending_tag_name("env");
        flow.set_pending_tag_value("prod");
        flow.add_pending_tag();

        assert_eq!(flow.assignment_tags().len(), 1);
        assert_eq!(flow.assignment_tags()["env"], "prod");
    }

    #[test]
    fn test_empty_tag_name_is_ignored() {
        let mut flow = AddFlow::new();
        flow.set_pending_tag_value("orphan");
        assert!(!flow.add_pending_tag());
        assert!(flow.assignment_tags().is_empty());
        assert_eq!(flow.pending_tag_value(), "orphan");
    }

    #[test]
    fn test_catalog_suggestions_skip_selected_names() {
        let mut flow = AddFlow::new();
        let request = flow.select_mode(TargetMode::Assigned).unwrap();
        assert!(flow.receive_tag_catalog(request, catalog()));
        assert_eq!(flow.available_tag_names(), vec!["env", "os"]);

        flow.set_pending_tag_name("env");
        assert_eq!(flow.suggested_values(), ["prod".to_string(), "dev".to_string()]);
        flow.set_pending_tag_value("prod");
        flow.add_pending_tag();

        assert_eq!(flow.available_tag_names(), vec!["os"]);
        assert!(flow.suggested_values().is_empty());

        flow.remove_tag("env");
        assert_eq!(flow.available_tag_names(), vec!["env", "os"]);
    }

    #[test]
    fn test_cancel_discards_input() {
        let mut flow = AddFlow::new();
        flow.set_title("never sent");
        assert_eq!(flow.cancel(), AddOutcome::Cancelled);
    }
}
