use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::extract::{openai::OpenAiClient, CompletionClient, VocabExtractor};
use crate::input::{read_video_list, VideoList};
use crate::records::{BuildContext, RecordBuilder, VideoRecords};
use crate::transcript::{TranscriptSource, YouTubeTranscriptSource};
use crate::writer::{write_set, WriteSummary};

/// Subtitle lines echoed to the log for each video
const PREVIEW_LINES: usize = 3;

/// Outcome of a complete run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub videos_listed: usize,
    pub videos_processed: usize,
    pub videos_skipped: usize,
    pub output: WriteSummary,
}

/// Per-video loop statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessStats {
    pub processed: usize,
    pub skipped: usize,
}

pub struct Workflow {
    transcripts: Box<dyn TranscriptSource>,
    extractor: VocabExtractor,
    output_root: PathBuf,
    max_videos: Option<usize>,
}

impl Workflow {
    /// Build the workflow with the YouTube and OpenAI collaborators.
    /// Fails when the API key is missing.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        let completion = OpenAiClient::new(&config.extractor, api_key)?;
        let transcripts = YouTubeTranscriptSource::new(&config.transcript)?;

        Ok(Self::with_collaborators(
            Box::new(transcripts),
            Box::new(completion),
            config.output.root.clone(),
            config.run.max_videos,
        ))
    }

    pub fn with_collaborators(
        transcripts: Box<dyn TranscriptSource>,
        completion: Box<dyn CompletionClient>,
        output_root: impl Into<PathBuf>,
        max_videos: Option<usize>,
    ) -> Self {
        Self {
            transcripts,
            extractor: VocabExtractor::new(completion),
            output_root: output_root.into(),
            max_videos,
        }
    }

    /// Process every video listed in `input_path` and write the resulting set.
    pub async fn run<P: AsRef<Path>>(&self, input_path: P) -> Result<RunSummary> {
        let input_path = input_path.as_ref();
        info!("Converting videos listed in {} to JSONL sets", input_path.display());

        let list = read_video_list(input_path).await?;
        let mut ctx = BuildContext::new();

        let stats = self.process_videos(&list, &mut ctx).await;

        for problem in ctx.dangling_references() {
            warn!("Inconsistent set: {}", problem);
        }

        let output = write_set(&ctx, &self.output_root, &list.languages).await?;

        info!(
            "Processing completed! Created resource set with {} immersion content entries in {}",
            output.resources,
            output.dir.display()
        );

        Ok(RunSummary {
            videos_listed: list.video_ids.len(),
            videos_processed: stats.processed,
            videos_skipped: stats.skipped,
            output,
        })
    }

    /// Run the per-video pipeline over the list, skipping videos whose
    /// transcript cannot be fetched.
    pub async fn process_videos(&self, list: &VideoList, ctx: &mut BuildContext) -> ProcessStats {
        let builder = RecordBuilder::new(list.languages.target.clone());
        let limit = self.max_videos.unwrap_or(usize::MAX);
        let total = list.video_ids.len().min(limit);

        if total < list.video_ids.len() {
            info!("Limiting run to the first {} of {} videos", total, list.video_ids.len());
        }

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} videos {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut stats = ProcessStats::default();
        for (idx, video_id) in list.video_ids.iter().take(total).enumerate() {
            info!("[{}/{}] Processing video: {}", idx + 1, total, video_id);
            pb.set_message(video_id.clone());

            match self.process_video(&builder, ctx, video_id, &list.languages.subtitle).await {
                Ok(records) => {
                    stats.processed += 1;
                    info!(
                        "Created resource {} for {} with {} vocab entries",
                        records.resource_id,
                        video_id,
                        records.vocab_ids.len()
                    );
                }
                Err(e) => {
                    stats.skipped += 1;
                    warn!("Error processing video {}: {}. Skipping this video.", video_id, e);
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        stats
    }

    async fn process_video(
        &self,
        builder: &RecordBuilder,
        ctx: &mut BuildContext,
        video_id: &str,
        subtitle_language: &str,
    ) -> Result<VideoRecords> {
        let transcript = self.transcripts.fetch(video_id, subtitle_language).await?;

        if transcript.language_code != subtitle_language {
            info!(
                "Requested {} subtitles for {} but received {}",
                subtitle_language, video_id, transcript.language_code
            );
        }

        for (i, line) in transcript.lines.iter().take(PREVIEW_LINES).enumerate() {
            debug!("Subtitle preview line {}: {}", i + 1, line);
        }

        let total_lines = transcript.lines.len();
        let mut pairs = Vec::new();
        for (idx, line) in transcript.lines.iter().enumerate() {
            info!("Processing line {}/{}: {}", idx + 1, total_lines, line);
            pairs.extend(self.extractor.extract(line, &transcript.language_code).await);
        }

        Ok(builder.add_video(ctx, video_id, &transcript.language_code, pairs))
    }
}
