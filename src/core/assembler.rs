use crate::config::template::TemplateConfig;
use crate::domain::model::{Collection, CollectionInfo};
use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the envelope with an empty item list. The timestamp is rendered once here.
pub fn assemble_envelope(template: &TemplateConfig, generated_at: NaiveDateTime) -> Collection {
    let timestamp = generated_at.format(TIMESTAMP_FORMAT).to_string();

    Collection {
        info: CollectionInfo {
            name: template.collection.name.clone(),
            description: template.render_description(&timestamp),
            schema: template.collection.schema.clone(),
        },
        item: Vec::new(),
        event: template.events.clone(),
        variable: template.variables.clone(),
    }
}
