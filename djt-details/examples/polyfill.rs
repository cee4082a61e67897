// Example: driving the details widget against a fake backing node.
//
// Walks through both modes: a node exposing the native "open" property
// (native mode, direct open write on mount) and one without it (latched
// as unsupported, fallback markup with manual visibility styling).

use std::collections::HashMap;
use std::fs::File;

use djt_details::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

struct FakeDomNode {
    name: String,
    open: Option<bool>,
    class_name: String,
    attributes: HashMap<String, String>,
}

impl FakeDomNode {
    fn new(name: &str, open: Option<bool>) -> Self {
        Self {
            name: name.into(),
            open,
            class_name: String::new(),
            attributes: HashMap::new(),
        }
    }
}

impl DomNode for FakeDomNode {
    fn node_name(&self) -> String {
        self.name.clone()
    }

    fn open_state(&self) -> Option<bool> {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = Some(open);
    }

    fn class_name(&self) -> String {
        self.class_name.clone()
    }

    fn set_class_name(&mut self, class_name: &str) {
        self.class_name = class_name.to_string();
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

fn main() -> Result<(), DetailsError> {
    // Set up file logging
    let log_file = File::create("polyfill.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let support = NativeSupport::new();

    // A host with native disclosure support.
    let details = Details::with_support(
        DetailsProps::new()
            .id("faq-1")
            .summary("What is this?")
            .content("<p>A disclosure widget.</p>"),
        support.clone(),
    );

    let mut node = FakeDomNode::new("details", Some(false));
    details.mounted(Some(&mut node))?;
    println!("native support: {:?}", support.get());
    println!("open after mount: {:?}", node.open);

    let output = details.render();
    println!("strategy: {:?}", output.strategy);
    for patch in &output.patches {
        apply_patch(&mut node, patch);
    }

    let event = details.on_pointer_down();
    println!("toggled: {:?}", event.kind);
    println!("strategy after toggle: {:?}", details.render().strategy);

    // A host without native support latches the shared flag for everyone.
    let legacy_support = NativeSupport::new();
    let legacy = Details::with_support(
        DetailsProps::new()
            .summary("Legacy host")
            .content("<p>Synthesized markup.</p>"),
        legacy_support.clone(),
    );

    let mut legacy_node = FakeDomNode::new("div", None);
    legacy.mounted(Some(&mut legacy_node))?;
    println!("legacy support: {:?}", legacy_support.get());
    println!("legacy strategy: {:?}", legacy.render().strategy);

    Ok(())
}
