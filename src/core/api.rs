//! Drives the sampling comparison: builds the weights and the alias
//! table, generates one item sequence per scheme, accumulates
//! histograms at the configured checkpoints and writes them out.

// std
use std::path::{Path, PathBuf};
// others
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::{debug, info, warn};
// pbrt
use crate::core::error::{Result, SamplingError};
use crate::core::histogram::{Histogram, HistogramAccumulator};
use crate::core::pbrt::Float;
use crate::core::pbrt::{GOLDEN_RATIO_CONJUGATE, PI_FRACT, SQRT_2_FRACT};
use crate::core::report::{format_sequence, Csv};
use crate::core::rng::Rng;
use crate::core::sampler::{Sampler, Sampler1D};
use crate::core::sampling::{
    linear_weights, map_uniform, map_weighted, validate_weights, AliasTable,
};
use crate::jobqueue::JobQueue;
use crate::samplers::additive::{AdditiveSampler, GoldenRatioSqrt2Sampler};
use crate::samplers::r2::{R2AdditiveSampler, R2Sampler};
use crate::samplers::random::RandomSampler;
use crate::samplers::sobol::SobolSampler;

/// Everything that used to be a process wide constant.
#[derive(Debug, Clone)]
pub struct Options {
    pub num_items: usize,
    /// Number of leading items rendered to the console per scheme.
    pub num_rolls_show: usize,
    /// Ascending draw counts at which histograms are taken; the last
    /// one is the total number of draws.
    pub num_rolls_histogram: Vec<usize>,
    pub base_character: char,
    /// Also run the one-minus golden ratio and one-minus pi schemes.
    pub verbose: bool,
    /// Use a fixed seed instead of the system clock for white noise.
    pub deterministic: bool,
    /// PCG32 sequence for white noise; `None` is the default stream.
    pub seed: Option<u64>,
    pub out_dir: PathBuf,
    pub write_csv: bool,
    /// 0 picks the number of cores.
    pub num_threads: u8,
    pub show_progress: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            num_items: 10,
            num_rolls_show: 80,
            num_rolls_histogram: vec![10, 100, 1_000, 10_000, 100_000, 1_000_000],
            base_character: '0',
            verbose: false,
            deterministic: true,
            seed: None,
            out_dir: PathBuf::from("out"),
            write_csv: true,
            num_threads: 0,
            show_progress: false,
        }
    }
}

impl Options {
    pub fn num_rolls_total(&self) -> usize {
        self.num_rolls_histogram.last().copied().unwrap_or(0)
    }
    pub fn validate(&mut self) -> Result<()> {
        if self.num_items == 0 {
            return Err(SamplingError::invalid_options("need at least one item"));
        }
        if self.num_rolls_histogram.is_empty() {
            return Err(SamplingError::invalid_options(
                "need at least one histogram checkpoint",
            ));
        }
        if self.num_rolls_histogram[0] == 0
            || self.num_rolls_histogram.windows(2).any(|w| w[0] >= w[1])
        {
            return Err(SamplingError::invalid_options(format!(
                "histogram checkpoints must be positive and ascending: {:?}",
                self.num_rolls_histogram
            )));
        }
        if self.num_rolls_total() >= u32::MAX as usize {
            return Err(SamplingError::invalid_options(format!(
                "at most {} draws are supported",
                u32::MAX - 1
            )));
        }
        if self.num_rolls_show > self.num_rolls_total() {
            warn!(
                "showing {} rolls but only {} are drawn",
                self.num_rolls_show,
                self.num_rolls_total()
            );
            self.num_rolls_show = self.num_rolls_total();
        }
        Ok(())
    }
    /// The white noise generator every run starts from.
    pub fn rng(&self) -> Rng {
        if self.deterministic {
            match self.seed {
                Some(seed) => Rng::with_sequence(seed),
                None => Rng::new(),
            }
        } else {
            Rng::from_time()
        }
    }
    pub fn num_cores(&self) -> usize {
        if self.num_threads == 0_u8 {
            num_cpus::get()
        } else {
            self.num_threads as usize
        }
    }
}

/// Schemes drawing one scalar per item.
#[derive(EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScalarScheme {
    #[strum(serialize = "Sequential")]
    Sequential,
    #[strum(serialize = "White Noise")]
    WhiteNoise,
    #[strum(serialize = "Golden Ratio")]
    GoldenRatio,
    #[strum(serialize = "Pi")]
    Pi,
    #[strum(serialize = "Sqrt2")]
    Sqrt2,
    #[strum(serialize = "One Minus Golden Ratio")]
    OneMinusGoldenRatio,
    #[strum(serialize = "One Minus Pi")]
    OneMinusPi,
}

impl ScalarScheme {
    /// Only shown with `Options::verbose`.
    pub fn is_verbose(&self) -> bool {
        match self {
            ScalarScheme::OneMinusGoldenRatio | ScalarScheme::OneMinusPi => true,
            _ => false,
        }
    }
    /// *sequential_delta* is the step of the sequential walk, *rng*
    /// the white noise generator.
    pub fn sampler(&self, sequential_delta: Float, rng: Rng) -> Sampler1D {
        match self {
            ScalarScheme::Sequential => {
                Sampler1D::Additive(AdditiveSampler::sequential(sequential_delta))
            }
            ScalarScheme::WhiteNoise => Sampler1D::Random(RandomSampler::new(rng)),
            ScalarScheme::GoldenRatio => {
                Sampler1D::Additive(AdditiveSampler::new(GOLDEN_RATIO_CONJUGATE, 0.0))
            }
            ScalarScheme::Pi => Sampler1D::Additive(AdditiveSampler::new(PI_FRACT, 0.0)),
            ScalarScheme::Sqrt2 => Sampler1D::Additive(AdditiveSampler::new(SQRT_2_FRACT, 0.0)),
            ScalarScheme::OneMinusGoldenRatio => Sampler1D::Additive(AdditiveSampler::new(
                1.0 as Float - GOLDEN_RATIO_CONJUGATE,
                0.0,
            )),
            ScalarScheme::OneMinusPi => {
                Sampler1D::Additive(AdditiveSampler::new(1.0 as Float - PI_FRACT, 0.0))
            }
        }
    }
}

/// Schemes drawing a 2D point per item through the alias table.
#[derive(EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AliasScheme {
    #[strum(serialize = "Alias White Noise")]
    WhiteNoise,
    #[strum(serialize = "Alias R2")]
    R2,
    #[strum(serialize = "Alias R2 (Additive)")]
    R2Additive,
    #[strum(serialize = "Alias GR / Sqrt2")]
    GoldenRatioSqrt2,
    #[strum(serialize = "Alias Sobol")]
    Sobol,
}

impl AliasScheme {
    pub fn sampler(&self, rng: Rng) -> Sampler {
        match self {
            AliasScheme::WhiteNoise => Sampler::Random(RandomSampler::new(rng)),
            AliasScheme::R2 => Sampler::R2(R2Sampler::default()),
            AliasScheme::R2Additive => Sampler::R2Additive(R2AdditiveSampler::default()),
            AliasScheme::GoldenRatioSqrt2 => {
                Sampler::GoldenRatioSqrt2(GoldenRatioSqrt2Sampler::default())
            }
            AliasScheme::Sobol => Sampler::Sobol(SobolSampler::new()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Scheme {
    Scalar(ScalarScheme),
    Alias(AliasScheme),
}

impl Scheme {
    pub fn label(&self) -> String {
        match self {
            Scheme::Scalar(scheme) => scheme.to_string(),
            Scheme::Alias(scheme) => scheme.to_string(),
        }
    }
}

/// How a uniform value becomes an item.
#[derive(Debug, Copy, Clone)]
pub enum ItemMapping<'a> {
    Uniform {
        num_items: usize,
    },
    Weighted {
        weights: &'a [Float],
        alias_table: &'a AliasTable,
    },
}

impl<'a> ItemMapping<'a> {
    pub fn num_items(&self) -> usize {
        match self {
            ItemMapping::Uniform { num_items } => *num_items,
            ItemMapping::Weighted { weights, .. } => weights.len(),
        }
    }
    fn map_scalar(&self, f: Float) -> usize {
        match self {
            ItemMapping::Uniform { num_items } => map_uniform(f, *num_items),
            ItemMapping::Weighted { weights, .. } => map_weighted(f, weights),
        }
    }
    fn alias_table(&self) -> Option<&'a AliasTable> {
        match self {
            ItemMapping::Uniform { .. } => None,
            ItemMapping::Weighted { alias_table, .. } => Some(*alias_table),
        }
    }
}

/// The generator of one scheme together with the way its output
/// becomes an item.
enum SchemeSampler<'a> {
    Scalar(Sampler1D),
    Alias(Sampler, &'a AliasTable),
}

/// The outcome of one scheme: the leading items and one histogram per
/// checkpoint.
#[derive(Debug, Clone)]
pub struct SchemeRun {
    pub scheme: Scheme,
    pub label: String,
    pub shown: Vec<usize>,
    pub histograms: Vec<(usize, Histogram)>,
}

/// Draw `options.num_rolls_total()` items with *scheme*. Alias
/// schemes need a weighted *mapping*.
pub fn run_scheme(
    scheme: Scheme,
    mapping: &ItemMapping,
    sequential_delta: Float,
    rng: Rng,
    options: &Options,
) -> Result<SchemeRun> {
    let label: String = scheme.label();
    let total: usize = options.num_rolls_total();
    let mut accumulator: HistogramAccumulator = HistogramAccumulator::new(mapping.num_items());
    let mut shown: Vec<usize> = Vec::with_capacity(options.num_rolls_show);
    let mut histograms: Vec<(usize, Histogram)> =
        Vec::with_capacity(options.num_rolls_histogram.len());
    let mut checkpoints = options.num_rolls_histogram.iter().peekable();
    let mut sampler: SchemeSampler = match scheme {
        Scheme::Scalar(s) => SchemeSampler::Scalar(s.sampler(sequential_delta, rng)),
        Scheme::Alias(s) => match mapping.alias_table() {
            Some(alias_table) => SchemeSampler::Alias(s.sampler(rng), alias_table),
            None => {
                return Err(SamplingError::invalid_options(format!(
                    "\"{}\" needs weights to build an alias table",
                    label
                )));
            }
        },
    };
    for roll in 0..total {
        let item: usize = match &mut sampler {
            SchemeSampler::Scalar(s) => mapping.map_scalar(s.get_1d()),
            SchemeSampler::Alias(s, alias_table) => alias_table.sample_point(&s.get_2d()),
        };
        accumulator.add(item);
        if roll < options.num_rolls_show {
            shown.push(item);
        }
        if let Some(count) = checkpoints.peek() {
            if **count == roll + 1 {
                histograms.push((roll + 1, accumulator.snapshot(&label)));
                checkpoints.next();
            }
        }
    }
    Ok(SchemeRun {
        scheme,
        label,
        shown,
        histograms,
    })
}

/// Run every scheme on up to `options.num_cores()` threads. The
/// result is in the order of *schemes*.
pub fn run_schemes(
    schemes: &[Scheme],
    mapping: &ItemMapping,
    sequential_delta: Float,
    options: &Options,
) -> Result<Vec<SchemeRun>> {
    let rng: Rng = options.rng();
    let num_cores: usize = options.num_cores().min(schemes.len()).max(1);
    debug!("sampling {} scheme(s) with {} thread(s)", schemes.len(), num_cores);
    if num_cores == 1 {
        let mut runs: Vec<SchemeRun> = Vec::with_capacity(schemes.len());
        if options.show_progress {
            for i in pbr::PbIter::new(0..schemes.len()) {
                runs.push(run_scheme(schemes[i], mapping, sequential_delta, rng, options)?);
            }
        } else {
            for scheme in schemes {
                runs.push(run_scheme(*scheme, mapping, sequential_delta, rng, options)?);
            }
        }
        return Ok(runs);
    }
    let job_queue: JobQueue = JobQueue::new(schemes.len());
    let mut slots: Vec<Option<Result<SchemeRun>>> = (0..schemes.len()).map(|_| None).collect();
    {
        let jq = &job_queue;
        let slots = &mut slots;
        crossbeam::scope(|scope| {
            let (run_tx, run_rx) = crossbeam_channel::bounded(num_cores);
            // spawn worker threads
            for _ in 0..num_cores {
                let run_tx = run_tx.clone();
                scope.spawn(move |_| {
                    while let Some(job) = jq.next() {
                        let run: Result<SchemeRun> =
                            run_scheme(schemes[job], mapping, sequential_delta, rng, options);
                        if run_tx.send((job, run)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(run_tx);
            let mut progress = if options.show_progress {
                Some(pbr::ProgressBar::new(jq.len() as u64))
            } else {
                None
            };
            for _ in 0..jq.len() {
                if let Ok((job, run)) = run_rx.recv() {
                    slots[job] = Some(run);
                }
                if let Some(pb) = progress.as_mut() {
                    pb.inc();
                }
            }
            if let Some(mut pb) = progress {
                pb.finish();
            }
        })
        .map_err(|_| SamplingError::WorkerPanicked)?;
    }
    slots
        .into_iter()
        .map(|slot| match slot {
            Some(run) => run,
            None => Err(SamplingError::WorkerPanicked),
        })
        .collect()
}

/// All schemes of one kind of test together with the distribution
/// they should converge to.
#[derive(Debug, Clone)]
pub struct SamplingRun {
    /// "unweighted" or "weighted", used in headers and file names.
    pub kind: &'static str,
    pub target: Vec<Float>,
    /// Whether the target is written as the first CSV row.
    pub write_target: bool,
    pub runs: Vec<SchemeRun>,
}

impl SamplingRun {
    /// Print the leading items of every scheme.
    pub fn show_sequences(&self, options: &Options) {
        let mut title: String = self.kind.to_string();
        if let Some(first) = title.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        println!("=================== {} ===================\n", title);
        for run in &self.runs {
            println!("  {}:", run.label);
            println!(
                "    {}\n",
                format_sequence(&run.shown, options.num_rolls_show, options.base_character)
            );
        }
    }
    /// Log the L1 distance of every histogram to the target; the
    /// final checkpoint at info level, the others at debug level.
    pub fn log_convergence(&self) {
        for run in &self.runs {
            let last: usize = run.histograms.len().saturating_sub(1);
            for (i, (count, histogram)) in run.histograms.iter().enumerate() {
                let l1: f64 = histogram.l1_distance(&self.target) as f64;
                let max_deviation: f64 = histogram.max_deviation(&self.target) as f64;
                if i == last {
                    info!(
                        kind = self.kind,
                        scheme = run.label.as_str(),
                        draws = *count,
                        l1,
                        max_deviation,
                        "converged"
                    );
                } else {
                    debug!(
                        kind = self.kind,
                        scheme = run.label.as_str(),
                        draws = *count,
                        l1,
                        max_deviation,
                        "convergence"
                    );
                }
            }
        }
    }
    /// One CSV per checkpoint, one row per scheme.
    pub fn csvs(&self, options: &Options) -> Vec<(usize, Csv)> {
        options
            .num_rolls_histogram
            .iter()
            .enumerate()
            .map(|(i, count)| {
                let mut csv: Csv = Csv::new();
                if self.write_target {
                    csv.add_row("Weights", &self.target);
                }
                for run in &self.runs {
                    if let Some((_, histogram)) = run.histograms.get(i) {
                        csv.add_histogram(histogram);
                    }
                }
                (*count, csv)
            })
            .collect()
    }
    pub fn save_csvs(&self, options: &Options, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for (count, csv) in self.csvs(options) {
            let path: PathBuf = csv.save(dir, self.kind, count)?;
            debug!("wrote {:?}", path);
            paths.push(path);
        }
        Ok(paths)
    }
}

fn scalar_schemes(options: &Options, verbose: bool) -> Vec<Scheme> {
    ScalarScheme::iter()
        .filter(|s| s.is_verbose() == verbose)
        .filter(|s| options.verbose || !s.is_verbose())
        .map(Scheme::Scalar)
        .collect()
}

/// Every item equally likely, scalar schemes through `map_uniform()`.
pub fn run_unweighted(options: &Options) -> Result<SamplingRun> {
    let n: usize = options.num_items;
    let target: Vec<Float> = vec![1.0 as Float / n as Float; n];
    let mut schemes: Vec<Scheme> = scalar_schemes(options, false);
    schemes.extend(scalar_schemes(options, true));
    let mapping: ItemMapping = ItemMapping::Uniform { num_items: n };
    let runs: Vec<SchemeRun> = run_schemes(&schemes, &mapping, 1.0 as Float / n as Float, options)?;
    Ok(SamplingRun {
        kind: "unweighted",
        target,
        write_target: false,
        runs,
    })
}

/// Items drawn by *weights*: scalar schemes through `map_weighted()`,
/// 2D schemes through the alias table.
pub fn run_weighted(options: &Options, weights: &[Float]) -> Result<SamplingRun> {
    validate_weights(weights)?;
    let alias_table: AliasTable = AliasTable::new(weights)?;
    let max_error: Float = alias_table
        .pmf()
        .iter()
        .zip(weights.iter())
        .map(|(p, w)| (p - w).abs())
        .fold(0.0 as Float, Float::max);
    debug!(
        items = weights.len(),
        max_error = max_error as f64,
        "built alias table"
    );
    // the sequential walk steps by the smallest weight
    let sequential_delta: Float = weights
        .iter()
        .copied()
        .filter(|w| *w > 0.0 as Float)
        .fold(Float::INFINITY, Float::min);
    let sequential_delta: Float = if sequential_delta.is_finite() {
        sequential_delta
    } else {
        1.0 as Float / weights.len() as Float
    };
    let mut schemes: Vec<Scheme> = scalar_schemes(options, false);
    schemes.extend(AliasScheme::iter().map(Scheme::Alias));
    schemes.extend(scalar_schemes(options, true));
    let mapping: ItemMapping = ItemMapping::Weighted {
        weights,
        alias_table: &alias_table,
    };
    let runs: Vec<SchemeRun> = run_schemes(&schemes, &mapping, sequential_delta, options)?;
    Ok(SamplingRun {
        kind: "weighted",
        target: weights.to_vec(),
        write_target: true,
        runs,
    })
}

/// Run the unweighted and the weighted comparison (with weights
/// proportional to `i + 1`), print the leading items, log convergence
/// and write the histograms.
pub fn run(options: &mut Options) -> Result<Vec<SamplingRun>> {
    options.validate()?;
    info!(
        items = options.num_items,
        draws = options.num_rolls_total(),
        "sampling"
    );
    let weights: Vec<Float> = linear_weights(options.num_items)?;
    let sampling_runs: Vec<SamplingRun> =
        vec![run_unweighted(options)?, run_weighted(options, &weights)?];
    for sampling_run in &sampling_runs {
        sampling_run.show_sequences(options);
        sampling_run.log_convergence();
        if options.write_csv {
            let paths: Vec<PathBuf> = sampling_run.save_csvs(options, &options.out_dir)?;
            info!(
                "wrote {} {} histogram(s) to {:?}",
                paths.len(),
                sampling_run.kind,
                options.out_dir
            );
        }
    }
    Ok(sampling_runs)
}

#[cfg(test)]
mod test {
    use super::*;

    fn small_options() -> Options {
        Options {
            num_rolls_show: 20,
            num_rolls_histogram: vec![10, 100, 1_000, 10_000],
            write_csv: false,
            num_threads: 1,
            ..Options::default()
        }
    }

    #[test]
    fn default_options_reproduce_constants() {
        let mut options: Options = Options::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.num_rolls_total(), 1_000_000);
        assert_eq!(options.num_items, 10);
        assert_eq!(options.num_rolls_show, 80);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let mut options: Options = Options {
            num_items: 0,
            ..small_options()
        };
        assert!(options.validate().is_err());
        let mut options: Options = Options {
            num_rolls_histogram: vec![100, 10],
            ..small_options()
        };
        assert!(options.validate().is_err());
        let mut options: Options = Options {
            num_rolls_histogram: vec![],
            ..small_options()
        };
        assert!(options.validate().is_err());
        let mut options: Options = Options {
            num_rolls_show: 1_000_000,
            ..small_options()
        };
        assert!(options.validate().is_ok());
        assert_eq!(options.num_rolls_show, 10_000);
    }

    #[test]
    fn labels_match_scheme_names() {
        assert_eq!(Scheme::Scalar(ScalarScheme::WhiteNoise).label(), "White Noise");
        assert_eq!(Scheme::Alias(AliasScheme::R2Additive).label(), "Alias R2 (Additive)");
        assert_eq!(Scheme::Alias(AliasScheme::GoldenRatioSqrt2).label(), "Alias GR / Sqrt2");
    }

    #[test]
    fn unweighted_schemes_and_order() {
        let options: Options = small_options();
        let run: SamplingRun = run_unweighted(&options).unwrap();
        let labels: Vec<&str> = run.runs.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Sequential", "White Noise", "Golden Ratio", "Pi", "Sqrt2"]);
        for scheme_run in &run.runs {
            assert_eq!(scheme_run.shown.len(), 20);
            assert_eq!(scheme_run.histograms.len(), 4);
            let (count, histogram) = &scheme_run.histograms[3];
            assert_eq!(*count, 10_000);
            assert!(histogram.l1_distance(&run.target) < 0.05, "{}", scheme_run.label);
        }
        // the sequential walk starts at item 1
        assert_eq!(run.runs[0].shown[..3], [1, 2, 3]);
    }

    #[test]
    fn verbose_schemes_come_last() {
        let options: Options = Options {
            verbose: true,
            ..small_options()
        };
        let run: SamplingRun = run_weighted(&options, &linear_weights(10).unwrap()).unwrap();
        let labels: Vec<String> = run.runs.iter().map(|r| r.label.clone()).collect();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[5], "Alias White Noise");
        assert_eq!(labels[9], "Alias Sobol");
        assert_eq!(labels[10], "One Minus Golden Ratio");
        assert_eq!(labels[11], "One Minus Pi");
    }

    #[test]
    fn threaded_run_matches_inline_run() {
        let weights: Vec<Float> = linear_weights(10).unwrap();
        let inline: SamplingRun = run_weighted(&small_options(), &weights).unwrap();
        let threaded: SamplingRun = run_weighted(
            &Options {
                num_threads: 4,
                ..small_options()
            },
            &weights,
        )
        .unwrap();
        assert_eq!(inline.runs.len(), threaded.runs.len());
        for (a, b) in inline.runs.iter().zip(threaded.runs.iter()) {
            assert_eq!(a.scheme, b.scheme);
            assert_eq!(a.shown, b.shown);
            assert_eq!(a.histograms, b.histograms);
        }
    }

    #[test]
    fn weighted_alias_schemes_converge() {
        let weights: Vec<Float> = linear_weights(10).unwrap();
        let run: SamplingRun = run_weighted(&small_options(), &weights).unwrap();
        for scheme_run in run
            .runs
            .iter()
            .filter(|r| matches!(r.scheme, Scheme::Alias(_)))
        {
            let (_, histogram) = scheme_run.histograms.last().unwrap();
            assert!(histogram.l1_distance(&weights) < 0.05, "{}", scheme_run.label);
        }
    }

    #[test]
    fn alias_scheme_needs_weights() {
        let options: Options = small_options();
        let mapping: ItemMapping = ItemMapping::Uniform { num_items: 10 };
        let result: Result<SchemeRun> = run_scheme(
            Scheme::Alias(AliasScheme::Sobol),
            &mapping,
            0.1,
            Rng::new(),
            &options,
        );
        match result {
            Err(SamplingError::InvalidOptions { reason }) => {
                assert!(reason.contains("Alias Sobol"), "{}", reason)
            }
            other => panic!("expected InvalidOptions, got {:?}", other.map(|r| r.label)),
        }
        let threaded: Options = Options {
            num_threads: 2,
            ..small_options()
        };
        let schemes: Vec<Scheme> = vec![
            Scheme::Scalar(ScalarScheme::Pi),
            Scheme::Alias(AliasScheme::R2),
        ];
        assert!(run_schemes(&schemes, &mapping, 0.1, &threaded).is_err());
    }

    #[test]
    fn scalar_scheme_runs_with_either_mapping() {
        let options: Options = small_options();
        let weights: Vec<Float> = linear_weights(10).unwrap();
        let alias_table: AliasTable = AliasTable::new(&weights).unwrap();
        let uniform: ItemMapping = ItemMapping::Uniform { num_items: 10 };
        let weighted: ItemMapping = ItemMapping::Weighted {
            weights: &weights,
            alias_table: &alias_table,
        };
        for mapping in [uniform, weighted].iter() {
            let run: SchemeRun = run_scheme(
                Scheme::Scalar(ScalarScheme::GoldenRatio),
                mapping,
                0.1,
                Rng::new(),
                &options,
            )
            .unwrap();
            assert_eq!(run.histograms.len(), 4);
            assert!(run.shown.iter().all(|item| *item < 10));
        }
    }

    #[test]
    fn weighted_csv_starts_with_weights() {
        let weights: Vec<Float> = vec![0.25, 0.75];
        let options: Options = Options {
            num_items: 2,
            ..small_options()
        };
        let run: SamplingRun = run_weighted(&options, &weights).unwrap();
        let csvs: Vec<(usize, Csv)> = run.csvs(&options);
        assert_eq!(csvs.len(), 4);
        let (count, csv) = &csvs[0];
        assert_eq!(*count, 10);
        assert_eq!(csv.rows[0], vec!["Weights", "0.250000", "0.750000"]);
        assert_eq!(csv.rows.len(), 1 + 10);
    }
}
