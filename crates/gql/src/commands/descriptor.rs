use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgql_types::Descriptor;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Extension of descriptor files stored in the binary encoding. Any other
/// extension is read as JSON.
pub(super) const BINARY_DESCRIPTOR_EXT: &str = "bin";

#[derive(Debug, clap::Args)]
pub(crate) struct DescriptorCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for \
             descriptor files within a directory. Files ending in `.bin` are \
             decoded as binary descriptors, everything else as JSON.",
        long,
        value_delimiter = ',',
    )]
    descriptor_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more descriptor files or directories \
             containing descriptor files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for DescriptorCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_exts = normalize_file_exts(&self.descriptor_file_exts);
        let mut failures: Vec<anyhow::Error> = vec![];

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        if has_matching_ext(path, &file_exts) {
                            log::trace!("Found descriptor file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        failures.push(anyhow::Error::new(e).context(format!(
                            "Failed to scan {path:#?}",
                        )));
                    },
                }
            }
        }

        // A single explicitly-named file is checked even when its extension
        // isn't one of --descriptor-file-exts.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --descriptor-file-exts ({}).",
                file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = num_skipped_files.saturating_sub(1);
            file_paths.push(first_arg_path.to_owned());
        }

        log::debug!(
            "Found {} descriptor files to be checked.",
            file_paths.len(),
        );

        let mut num_type_names = 0;
        let mut num_abstract_types = 0;
        for path in &file_paths {
            match load_descriptor_file(path).await {
                Ok(descriptor) => {
                    num_type_names += descriptor.type_names().len();
                    num_abstract_types += descriptor.abstract_type_names().count();
                },
                Err(e) => failures.push(e),
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} of {} descriptor files failed to check:\n{}",
                output_utils::RED_X,
                failures.len(),
                file_paths.len(),
                failures.iter()
                    .map(|e| format!("  * {e:#}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All descriptors checked successfully:\n",
                "  * Checked {} files.\n",
                "  * Skipped {} non-descriptor files.\n",
                "  * Found {} type names.\n",
                "  * Found {} abstract types with possible types.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            num_type_names,
            num_abstract_types,
        ))
    }
}

/// Lower-cases each extension and strips any leading `.`, dropping
/// duplicates and empty entries.
pub(super) fn normalize_file_exts(file_exts: &[String]) -> HashSet<String> {
    file_exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

pub(super) fn has_matching_ext(path: &Path, file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| file_exts.contains(&ext))
}

/// Decodes `bytes` as a binary descriptor when `path` ends in `.bin` and
/// as JSON otherwise.
pub(super) fn decode_descriptor(
    path: &Path,
    bytes: &[u8],
) -> anyhow::Result<Descriptor> {
    let is_binary = path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(BINARY_DESCRIPTOR_EXT));
    let descriptor =
        if is_binary {
            Descriptor::from_bytes(bytes)?
        } else {
            let json = std::str::from_utf8(bytes)
                .context("descriptor JSON is not valid UTF-8")?;
            Descriptor::from_json(json)?
        };
    Ok(descriptor)
}

async fn load_descriptor_file(path: &Path) -> anyhow::Result<Descriptor> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {path:#?}"))?;
    let descriptor = decode_descriptor(path, &bytes)
        .with_context(|| format!("Invalid descriptor {path:#?}"))?;
    log::debug!(
        "{path:#?}: {} type names, {} abstract types.",
        descriptor.type_names().len(),
        descriptor.abstract_type_names().count(),
    );
    Ok(descriptor)
}
