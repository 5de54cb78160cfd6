use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use std::path::Path;
use tokio::fs;
use tokio::sync::RwLock;

use super::{NewTemplate, Template, TemplateStore};
use crate::error::CardError;
use crate::template::default_templates;

#[derive(Debug)]
struct Inner {
    templates: Vec<Template>,
    next_id: i64,
}

/// Template store held in memory, seeded with the built-in templates.
#[derive(Debug)]
pub struct MemoryTemplateStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTemplateStore {
    /// Store containing only the built-in templates
    pub fn new() -> Self {
        let mut inner = Inner {
            templates: Vec::new(),
            next_id: 1,
        };
        for template in default_templates() {
            inner.insert(template);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Store with no templates at all
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(Inner {
                templates: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Add one template per `*.html` file in `dir`, named after the file stem.
    ///
    /// Files whose name is already taken are skipped. Returns the number of
    /// templates added.
    pub async fn load_dir(&self, dir: &Path) -> Result<usize, CardError> {
        let mut entries = fs::read_dir(dir).await?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
            {
                paths.push(path);
            }
        }
        paths.sort();

        let mut added = 0;
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let html = fs::read_to_string(&path).await?;
            let template = NewTemplate {
                name: name.to_string(),
                html,
                preview_image_url: None,
                created_by: Some(path.display().to_string()),
            };
            match self.create(template).await {
                Ok(_) => added += 1,
                Err(CardError::DuplicateTemplate(name)) => {
                    warn!("Skipping {}: template '{}' already exists", path.display(), name);
                }
                Err(e) => return Err(e),
            }
        }

        info!("Loaded {} templates from {}", added, dir.display());
        Ok(added)
    }
}

impl Inner {
    fn insert(&mut self, template: NewTemplate) -> Template {
        let now = Utc::now();
        let template = Template {
            id: self.next_id,
            name: template.name,
            html: template.html,
            preview_image_url: template.preview_image_url,
            created_by: template.created_by,
            created_at: now,
            updated_at: now,
            last_generated_html: None,
            last_generated_at: None,
        };
        self.next_id += 1;
        self.templates.push(template.clone());
        template
    }

    fn find_mut(&mut self, id: i64) -> Result<&mut Template, CardError> {
        self.templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CardError::TemplateNotFound(id.to_string()))
    }

    fn name_taken(&self, name: &str, except_id: Option<i64>) -> bool {
        self.templates
            .iter()
            .any(|t| t.name == name && Some(t.id) != except_id)
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn list(&self) -> Result<Vec<Template>, CardError> {
        Ok(self.inner.read().await.templates.clone())
    }

    async fn get(&self, id: i64) -> Result<Template, CardError> {
        self.inner
            .read()
            .await
            .templates
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| CardError::TemplateNotFound(id.to_string()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Template, CardError> {
        self.inner
            .read()
            .await
            .templates
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| CardError::TemplateNotFound(name.to_string()))
    }

    async fn create(&self, template: NewTemplate) -> Result<Template, CardError> {
        let mut inner = self.inner.write().await;
        if inner.name_taken(&template.name, None) {
            return Err(CardError::DuplicateTemplate(template.name));
        }
        let template = inner.insert(template);
        debug!("Created template {} '{}'", template.id, template.name);
        Ok(template)
    }

    async fn update(&self, template: Template) -> Result<Template, CardError> {
        let mut inner = self.inner.write().await;
        if inner.name_taken(&template.name, Some(template.id)) {
            return Err(CardError::DuplicateTemplate(template.name));
        }
        let slot = inner.find_mut(template.id)?;
        slot.name = template.name;
        slot.html = template.html;
        slot.preview_image_url = template.preview_image_url;
        slot.created_by = template.created_by;
        slot.updated_at = Utc::now();
        debug!("Updated template {} '{}'", slot.id, slot.name);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), CardError> {
        let mut inner = self.inner.write().await;
        let before = inner.templates.len();
        inner.templates.retain(|t| t.id != id);
        if inner.templates.len() == before {
            return Err(CardError::TemplateNotFound(id.to_string()));
        }
        debug!("Deleted template {}", id);
        Ok(())
    }

    async fn record_generation(&self, id: i64, html: &str) -> Result<Template, CardError> {
        let mut inner = self.inner.write().await;
        let slot = inner.find_mut(id)?;
        slot.last_generated_html = Some(html.to_string());
        slot.last_generated_at = Some(Utc::now());
        debug!("Saved {} bytes of generated HTML to template {}", html.len(), id);
        Ok(slot.clone())
    }
}
