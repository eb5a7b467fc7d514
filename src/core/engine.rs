use crate::core::{FileStatus, Generator, OutputSink};
use crate::domain::model::GeneratedFile;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub files: Vec<(GeneratedFile, FileStatus)>,
    pub dry_run: bool,
}

impl GenerationSummary {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|(_, s)| *s == status).count()
    }
}

pub struct GenerationEngine<G: Generator, S: OutputSink> {
    generator: G,
    sink: S,
}

impl<G: Generator, S: OutputSink> GenerationEngine<G, S> {
    pub fn new(generator: G, sink: S) -> Self {
        Self { generator, sink }
    }

    pub fn run(&self, dry_run: bool) -> Result<GenerationSummary> {
        tracing::info!("Generating model traits...");
        let generated = self.generator.generate()?;

        if generated.is_empty() {
            tracing::warn!("No files were generated");
        } else {
            tracing::info!("Generated {} file(s)", generated.len());
        }

        let mut files = Vec::with_capacity(generated.len());
        for file in generated {
            let status = if dry_run {
                self.sink.preview(&file)?
            } else {
                self.sink.write(&file)?
            };
            tracing::debug!("{:?}: {}", status, file.path);
            files.push((file, status));
        }

        Ok(GenerationSummary { files, dry_run })
    }
}
