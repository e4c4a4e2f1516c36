//! Detection service combining all detectors.

use crate::config::DetectionOptions;
use crate::detectors::{
    ClassificationResult, CrawlerDetector, DetectionContext, Detector, Device, DeviceDetector,
    Engine, EngineDetector, PlatformDetector, PlatformInfo, SignatureTable,
};
use crate::error::DetectionError;
use crate::responsive::{ResponsiveResolver, ResponsiveView};
use serde::Serialize;
use tracing::debug;

/// Everything detected about a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    pub crawler: ClassificationResult,
    pub device: Device,
    pub platform: PlatformInfo,
    pub engine: Engine,
    pub responsive: ResponsiveView,
}

/// Runs every detector over a request.
///
/// Built once from validated options and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct DetectionService {
    crawler: CrawlerDetector,
    device: DeviceDetector,
    platform: PlatformDetector,
    engine: EngineDetector,
    responsive: ResponsiveResolver,
}

impl DetectionService {
    /// Create a service with the built-in crawler signatures.
    pub fn new(options: DetectionOptions) -> Result<Self, DetectionError> {
        Self::with_signatures(options, SignatureTable::defaults())
    }

    /// Create a service with a custom crawler signature table.
    pub fn with_signatures(
        options: DetectionOptions,
        signatures: SignatureTable,
    ) -> Result<Self, DetectionError> {
        options.validate()?;
        let crawler = CrawlerDetector::with_table(signatures, &options.crawler)?;

        debug!(
            signatures = crawler.table().len(),
            others = options.crawler.others.len(),
            responsive = options.responsive.enabled,
            "Detection service ready"
        );

        Ok(Self {
            crawler,
            device: DeviceDetector::new(),
            platform: PlatformDetector::new(),
            engine: EngineDetector::new(),
            responsive: ResponsiveResolver::new(options.responsive),
        })
    }

    /// Create with default options.
    pub fn with_defaults() -> Self {
        Self {
            crawler: CrawlerDetector::default(),
            device: DeviceDetector::new(),
            platform: PlatformDetector::new(),
            engine: EngineDetector::new(),
            responsive: ResponsiveResolver::default(),
        }
    }

    /// Run all detectors.
    pub fn detect(&self, ctx: &DetectionContext) -> DetectionReport {
        let crawler = self.crawler.detect(ctx);
        debug!(
            detector = self.crawler.name(),
            is_crawler = crawler.is_crawler(),
            kind = %crawler.kind(),
            "Crawler classification complete"
        );

        let device = self.device.detect(ctx);
        debug!(detector = self.device.name(), device = %device, "Device detection complete");

        let platform = self.platform.detect(ctx);
        debug!(
            detector = self.platform.name(),
            platform = %platform.kind,
            processor = ?platform.processor,
            "Platform detection complete"
        );

        // Engine resolution depends on the platform verdict.
        let engine = match ctx.user_agent() {
            Some(ua) => self.engine.classify(ua, platform.kind),
            None => Engine::Unknown,
        };
        debug!(detector = self.engine.name(), engine = %engine, "Engine detection complete");

        let responsive = self.responsive.resolve_for(ctx, device);

        DetectionReport {
            crawler,
            device,
            platform,
            engine,
            responsive,
        }
    }

    /// Classify a bare User-Agent string as a crawler.
    pub fn classify(&self, ua: &str) -> ClassificationResult {
        self.crawler.classify(ua)
    }

    pub fn responsive(&self) -> &ResponsiveResolver {
        &self.responsive
    }
}

impl Default for DetectionService {
    fn default() -> Self {
        Self::with_defaults()
    }
}
