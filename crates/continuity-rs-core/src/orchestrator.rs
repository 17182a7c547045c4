//! One thinking run: load, prompt, generate, persist, render.

use crate::error::ContinuityCoreError;
use crate::page::PageRenderer;
use crate::prompt::PromptBuilder;
use continuity_rs_config::{ContinuityConfig, Credentials};
use continuity_rs_llm::{TextGenerator, build_generator};
use continuity_rs_memory::{FileThoughtStore, ThoughtRecord, ThoughtStore};
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Progress of a single run. Failure is possible after `CredentialsChecked`
/// (missing keys never reach a run) and at `Generated`; filesystem errors
/// while persisting end the run as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Idle,
    CredentialsChecked,
    Loaded,
    PromptBuilt,
    Generated,
    Persisted,
    Rendered,
    Done,
}

impl RunStage {
    fn advance(self, next: RunStage) -> RunStage {
        debug!("run stage {:?} -> {:?}", self, next);
        next
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The thought appended by this run.
    pub thought: ThoughtRecord,
    /// Number of thoughts after the run.
    pub total: usize,
    /// Provider that produced the thought.
    pub provider: String,
    /// Where the page was written.
    pub page_path: PathBuf,
}

/// Wires the store, prompt builder, generator and renderer into one run.
#[derive(Clone)]
pub struct Orchestrator {
    store: Arc<dyn ThoughtStore>,
    generator: Arc<dyn TextGenerator>,
    prompt: PromptBuilder,
    renderer: PageRenderer,
    page_path: PathBuf,
}

impl Orchestrator {
    /// Create an orchestrator with the default prompt builder and renderer.
    pub fn new(
        store: Arc<dyn ThoughtStore>,
        generator: Arc<dyn TextGenerator>,
        page_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            generator,
            prompt: PromptBuilder::default(),
            renderer: PageRenderer::default(),
            page_path: page_path.into(),
        }
    }

    /// Replace the prompt builder.
    pub fn with_prompt_builder(mut self, prompt: PromptBuilder) -> Self {
        self.prompt = prompt;
        self
    }

    /// Replace the page renderer.
    pub fn with_renderer(mut self, renderer: PageRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Build a file-backed orchestrator from config.
    ///
    /// Credentials are checked first; when neither key is present this fails
    /// before anything else is constructed or read.
    pub fn from_config(
        config: &ContinuityConfig,
        credentials: &Credentials,
    ) -> Result<Self, ContinuityCoreError> {
        let selection = credentials.select()?;
        let prompt = PromptBuilder::from_config(&config.prompt)?;
        let store = Arc::new(FileThoughtStore::new(&config.store.path));
        let generator = build_generator(&selection, &config.providers);
        Ok(Self::new(store, generator, &config.page.path)
            .with_prompt_builder(prompt)
            .with_renderer(PageRenderer::new(config.page.window)))
    }

    /// Path the page is written to.
    pub fn page_path(&self) -> &Path {
        &self.page_path
    }

    /// Run one cycle. Nothing is written unless generation succeeds.
    pub async fn run(&self) -> Result<RunReport, ContinuityCoreError> {
        let stage = RunStage::Idle.advance(RunStage::CredentialsChecked);

        let mut records = self.store.load_all().await?;
        info!("Loaded {} previous thoughts.", records.len());
        let stage = stage.advance(RunStage::Loaded);

        let prompt = self.prompt.build(&records);
        let stage = stage.advance(RunStage::PromptBuilt);

        info!("Thinking...");
        let content = match self.generator.generate(&prompt).await {
            Ok(content) => content,
            Err(err) => {
                error!(
                    "generation failed (provider={}, error={err})",
                    self.generator.name()
                );
                return Err(err.into());
            }
        };
        info!("Thought generated via {}.", self.generator.name());
        let stage = stage.advance(RunStage::Generated);

        let thought = self.store.append(&content).await?;
        records.push(thought.clone());
        let stage = stage.advance(RunStage::Persisted);

        write_page(&self.page_path, &self.renderer.render(&records))?;
        let stage = stage.advance(RunStage::Rendered);

        stage.advance(RunStage::Done);
        Ok(RunReport {
            thought,
            total: records.len(),
            provider: self.generator.name().to_string(),
            page_path: self.page_path.clone(),
        })
    }
}

/// Re-render the page from stored thoughts without generating. Returns the thought count.
pub async fn render_existing(
    store: &dyn ThoughtStore,
    renderer: &PageRenderer,
    page_path: &Path,
) -> Result<usize, ContinuityCoreError> {
    let records = store.load_all().await?;
    write_page(page_path, &renderer.render(&records))?;
    Ok(records.len())
}

/// Replace the page at `path` with `html` via a sibling temp file.
pub fn write_page(path: &Path, html: &str) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);
    std::fs::write(&temp_path, html)?;
    std::fs::rename(&temp_path, path)?;
    info!("page written (path={}, len={})", path.display(), html.len());
    Ok(())
}
