//! auto-indent - fixes indentation and brace placement in C-style source code

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, Cursor, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use auto_indent::process::format_file;
use auto_indent::{parse_args, CliArgs, Config, Result};
use glob::Pattern;
use rayon::prelude::*;
use similar::TextDiff;
use walkdir::WalkDir;

/// Source file extensions to process
const SOURCE_EXTENSIONS: &[&str] = &[
    "c", "h", "cc", "cpp", "cxx", "hpp", "hxx", "hh", "cs", "java", "js", "jsx", "ts", "tsx",
];

/// Default maximum file size in bytes (100 MB)
/// Files larger than this are skipped to prevent memory exhaustion
const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = parse_args();

    // Check if we should read from stdin
    let use_stdin =
        args.inputs.is_empty() || (args.inputs.len() == 1 && args.inputs[0].as_os_str() == "-");

    // If no inputs and running interactively, print usage; otherwise read from stdin
    if args.inputs.is_empty() && io::stdin().is_terminal() {
        print_usage();
        return Ok(());
    }

    if use_stdin {
        // Process stdin - use current directory for config discovery
        let config = build_config(&args, None)?;
        return process_stdin(&config, &args);
    }

    // Build base configuration for parallel processing
    // For explicit config files, we use one config for all files
    // For auto-discovery, each file may have its own config
    let use_per_file_config = args.config.is_none();
    let base_config = if use_per_file_config {
        None
    } else {
        Some(build_config(&args, None)?)
    };

    // Configure thread pool if --jobs specified
    if let Some(jobs) = args.jobs {
        if jobs > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
            {
                eprintln!("Warning: failed to configure thread pool: {e}");
            }
        }
    }

    // Collect all files to process
    let files = collect_files(&args);

    if files.is_empty() {
        if !args.silent {
            eprintln!("No source files found to format.");
        }
        return Ok(());
    }

    // Process files
    let use_sequential = args.stdout || args.diff || args.jobs == Some(1);
    if use_sequential {
        // Sequential processing keeps stdout output in input order
        process_files_sequential(&files, base_config.as_ref(), &args);
    } else {
        // Parallel processing for in-place formatting
        process_files_parallel(&files, base_config.as_ref(), &args);
    }

    Ok(())
}

/// Build configuration from CLI args and optional config file
///
/// If `for_path` is provided and no explicit config file is specified,
/// uses auto-discovery to find config files in parent directories.
fn build_config(args: &CliArgs, for_path: Option<&Path>) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        // Explicit config file specified
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else if let Some(path) = for_path {
        // Auto-discover config files from parent directories
        if args.debug {
            let discovered = Config::discover_config_files(path);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered for: {}", path.display());
            } else {
                eprintln!("[DEBUG] Discovered config files for {}:", path.display());
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(path)
    } else {
        // No path provided, use current directory for discovery
        Config::from_discovered_files(&std::env::current_dir().unwrap_or_default())
    };

    // Override with CLI arguments
    if let Some(tab_size) = args.tab_size {
        config.tab_size = tab_size;
    }
    if args.tabs {
        config.insert_spaces = false;
    }
    if args.no_braces {
        config.split_braces = false;
    }
    if args.no_blank_lines {
        config.blank_before_blocks = false;
        config.blank_before_functions = false;
    }
    // Fine-grained flags override the coarse --no-blank-lines
    if let Some(val) = args.blank_blocks {
        config.blank_before_blocks = val;
    }
    if let Some(val) = args.blank_functions {
        config.blank_before_functions = val;
    }
    if args.no_reindent {
        config.reindent = false;
    }

    // Print final config in debug mode
    if args.debug {
        print_config_debug(&config);
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Print configuration values in debug mode
fn print_config_debug(config: &Config) {
    eprintln!("[DEBUG] Configuration:");
    eprintln!("[DEBUG]   tab_size: {}", config.tab_size);
    eprintln!("[DEBUG]   insert_spaces: {}", config.insert_spaces);
    eprintln!("[DEBUG]   split_braces: {}", config.split_braces);
    eprintln!("[DEBUG]   blank_before_blocks: {}", config.blank_before_blocks);
    eprintln!(
        "[DEBUG]   blank_before_functions: {}",
        config.blank_before_functions
    );
    eprintln!("[DEBUG]   reindent: {}", config.reindent);
}

/// Collect all files to process, handling directories and recursive flag
fn collect_files(args: &CliArgs) -> Vec<PathBuf> {
    // Compile exclude patterns
    let exclude_patterns: Vec<Pattern> = args
        .exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    // Get custom source extensions
    let custom_extensions = &args.extensions;

    let mut files = Vec::new();

    for input in &args.inputs {
        if input.is_file() {
            if !is_excluded(input, &exclude_patterns) {
                files.push(input.clone());
            }
        } else if input.is_dir() {
            if args.recursive {
                // Recursive directory traversal
                // Note: WalkDir detects symlink loops when follow_links(true) and
                // returns errors for them. We skip errors via filter_map(ok).
                // max_depth prevents runaway traversal in pathological directory structures.
                for entry in WalkDir::new(input)
                    .follow_links(true)
                    .max_depth(256)
                    .into_iter()
                    .filter_map(std::result::Result::ok)
                {
                    let path = entry.path();
                    if path.is_file()
                        && is_source_file(path, custom_extensions)
                        && !is_excluded(path, &exclude_patterns)
                    {
                        files.push(path.to_path_buf());
                    }
                }
            } else {
                // Non-recursive: only direct children
                if let Ok(entries) = std::fs::read_dir(input) {
                    for entry in entries.filter_map(std::result::Result::ok) {
                        let path = entry.path();
                        if path.is_file()
                            && is_source_file(&path, custom_extensions)
                            && !is_excluded(&path, &exclude_patterns)
                        {
                            files.push(path);
                        }
                    }
                }
            }
        }
    }

    files
}

/// Check if a path matches any exclusion pattern
fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        // Match against full path
        if pattern.matches(&path_str) {
            return true;
        }

        // Match against file name only
        if let Some(file_name) = path.file_name() {
            if pattern.matches(&file_name.to_string_lossy()) {
                return true;
            }
        }

        // Match against each path component (for directory patterns)
        for component in path.components() {
            if let std::path::Component::Normal(c) = component {
                if pattern.matches(&c.to_string_lossy()) {
                    return true;
                }
            }
        }
    }

    false
}

/// Count the number of lines in a byte buffer
#[allow(clippy::naive_bytecount)] // Simple use case, no need for bytecount crate
fn count_lines(contents: &[u8]) -> usize {
    // Count newlines; add 1 if file doesn't end with newline and has content
    let newlines = contents.iter().filter(|&&b| b == b'\n').count();
    if contents.is_empty() {
        0
    } else if contents.last() == Some(&b'\n') {
        newlines
    } else {
        newlines + 1
    }
}

/// Check if a file has a recognized source extension
/// Checks against both default extensions and any custom extensions provided
fn is_source_file(path: &Path, custom_extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            // Check default extensions
            if SOURCE_EXTENSIONS.contains(&ext) {
                return true;
            }
            // Check custom extensions (with or without leading dot)
            for custom in custom_extensions {
                let custom_ext = custom.strip_prefix('.').unwrap_or(custom);
                if ext == custom_ext {
                    return true;
                }
            }
            false
        })
}

/// Process files sequentially (for stdout/diff output)
fn process_files_sequential(files: &[PathBuf], base_config: Option<&Config>, args: &CliArgs) {
    for path in files {
        // Use base config if provided, otherwise discover per-file config
        let file_result = if let Some(config) = base_config {
            process_single_file(path, config, args)
        } else {
            match build_config(args, Some(path)) {
                Ok(config) => process_single_file(path, &config, args),
                Err(e) => Err(e),
            }
        };

        if let Err(e) = file_result {
            eprintln!("Error formatting {}: {}", path.display(), e);
        }
    }
}

/// Process files in parallel using Rayon
fn process_files_parallel(files: &[PathBuf], base_config: Option<&Config>, args: &CliArgs) {
    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        // Use base config if provided, otherwise discover per-file config
        let file_result = if let Some(config) = base_config {
            process_single_file(path, config, args)
        } else {
            match build_config(args, Some(path)) {
                Ok(config) => process_single_file(path, &config, args),
                Err(e) => Err(e),
            }
        };

        match file_result {
            Ok(()) => {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::Relaxed);
                eprintln!("Error formatting {}: {}", path.display(), e);
            }
        }
    });

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    if !args.silent {
        if errors == 0 {
            eprintln!("Formatted {success} files successfully.");
        } else {
            eprintln!("Formatted {success} files, {errors} errors.");
        }
    }
}

/// Process a single file
fn process_single_file(path: &PathBuf, config: &Config, args: &CliArgs) -> Result<()> {
    // Check file size BEFORE reading to prevent memory exhaustion
    let metadata = std::fs::metadata(path)?;
    let file_size = metadata.len();
    if file_size > DEFAULT_MAX_FILE_SIZE {
        if !args.silent {
            let size_mb = file_size / (1024 * 1024);
            let limit_mb = DEFAULT_MAX_FILE_SIZE / (1024 * 1024);
            eprintln!(
                "Skipping {} ({} MB exceeds limit of {} MB)",
                path.display(),
                size_mb,
                limit_mb
            );
        }
        return Ok(());
    }

    // Read input file into memory
    let mut file_contents = Vec::new();
    File::open(path)?.read_to_end(&mut file_contents)?;

    // Check line count limit if specified
    if let Some(max_lines) = args.exclude_max_lines {
        let line_count = count_lines(&file_contents);
        if line_count > max_lines {
            if !args.silent {
                eprintln!(
                    "Skipping {} ({} lines exceeds limit of {})",
                    path.display(),
                    line_count,
                    max_lines
                );
            }
            return Ok(());
        }
    }

    if !args.silent && !args.stdout && !args.diff {
        eprintln!("Formatting: {}", path.display());
    }

    // Format the file
    let mut reader = Cursor::new(&file_contents);
    let mut output = Vec::new();
    format_file(&mut reader, &mut output, config)?;

    // Output results
    if args.stdout {
        io::stdout().write_all(&output)?;
    } else if args.diff {
        print_diff(path, &file_contents, &output);
    } else {
        // Write back to file (in-place)
        std::fs::write(path, &output)?;
    }

    Ok(())
}

/// Print a unified diff between original and formatted contents
fn print_diff(path: &Path, original: &[u8], formatted: &[u8]) {
    if original == formatted {
        return;
    }
    let original = String::from_utf8_lossy(original);
    let formatted = String::from_utf8_lossy(formatted);
    let diff = TextDiff::from_lines(original.as_ref(), formatted.as_ref());
    print!(
        "{}",
        diff.unified_diff().context_radius(3).header(
            &format!("a/{}", path.display()),
            &format!("b/{}", path.display())
        )
    );
}

/// Process input from stdin, output to stdout
fn process_stdin(config: &Config, args: &CliArgs) -> Result<()> {
    // Read all input from stdin
    let mut stdin_contents = Vec::new();
    io::stdin().read_to_end(&mut stdin_contents)?;

    // Check size after reading to prevent processing extremely large input
    #[allow(clippy::cast_possible_truncation)]
    let stdin_size = stdin_contents.len() as u64;
    if stdin_size > DEFAULT_MAX_FILE_SIZE {
        anyhow::bail!(
            "stdin input too large ({} MB exceeds limit of {} MB)",
            stdin_size / (1024 * 1024),
            DEFAULT_MAX_FILE_SIZE / (1024 * 1024)
        );
    }

    // Format the input
    let mut reader = Cursor::new(&stdin_contents);
    let mut output = Vec::new();
    format_file(&mut reader, &mut output, config)?;

    // Always output to stdout when reading from stdin
    io::stdout().write_all(&output)?;

    if !args.silent {
        eprintln!("Formatted stdin successfully.");
    }

    Ok(())
}

fn print_usage() {
    println!(
        "auto-indent v{} - indentation fixer for C-style source code",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Normalizes tab/space indentation, fixes brace placement, and reindents.");
    println!();
    println!("Usage:");
    println!("  auto-indent [OPTIONS] <FILE>...");
    println!("  auto-indent [OPTIONS] -r <DIRECTORY>");
    println!("  auto-indent [OPTIONS] -              # Read from stdin");
    println!("  cat file.c | auto-indent             # Pipe input");
    println!();
    println!("Examples:");
    println!("  auto-indent file.c              # Format single file in-place");
    println!("  auto-indent *.c                 # Format multiple files");
    println!("  auto-indent -r src/             # Recursively format directory");
    println!("  auto-indent --stdout file.c     # Output to stdout");
    println!("  auto-indent -t 8 --tabs file.c  # 8-column tab stops, tab indentation");
    println!("  auto-indent - < file.c          # Read from stdin, write to stdout");
    println!();
    println!("Options:");
    println!("  -t, --tab-size <NUM>            Tab-stop width in columns [default: 4]");
    println!("      --tabs                      Canonicalize indentation to tabs");
    println!("      --no-braces                 Disable the brace placement pass");
    println!("      --no-blank-lines            Disable blank-line insertion");
    println!("      --no-reindent               Disable the final reindent pass");
    println!("      --blank-blocks [BOOL]       Blank line before block constructs");
    println!("      --blank-functions [BOOL]    Blank line before function declarations");
    println!("  -r, --recursive                 Process directories recursively");
    println!("  -e, --exclude <PATTERN>         Exclude files/dirs matching pattern (repeatable)");
    println!("  -x, --extension <EXT>           Additional source extension (repeatable)");
    println!("  -m, --exclude-max-lines <NUM>   Skip files with more than NUM lines");
    println!("  -s, --stdout                    Output to stdout");
    println!("  -d, --diff                      Show a unified diff");
    println!("  -c, --config <FILE>             Config file path (overrides auto-discovery)");
    println!("  -j, --jobs <NUM>                Parallel jobs (0=auto, 1=sequential)");
    println!("  -D, --debug                     Enable debug output");
    println!("  -S, --silent                    Silent mode");
    println!("  -h, --help                      Print help");
    println!();
    println!("Supported extensions: .c, .h, .cc, .cpp, .cxx, .hpp, .hxx, .hh, .cs, .java,");
    println!("                      .js, .jsx, .ts, .tsx");
    println!();
    println!("Config file auto-discovery:");
    println!("  Searches for auto-indent.toml in parent directories");
    println!("  starting from the file being formatted up to the root directory.");
    println!("  Also checks auto-indent.toml in the home directory.");
    println!("  More specific configs (closer to file) override less specific ones.");
}
