//! Slide image cache with background decoding
//!
//! Images decode on the worker pool and come back over a crossbeam channel.
//! The UI thread drains finished decodes once per frame and uploads them as
//! egui textures. Decoded textures are kept in an LRU keyed by path.

use anyhow::{Context, Result, bail};
use crossbeam_channel::{Receiver, Sender, unbounded};
use eframe::egui;
use log::{debug, trace, warn};
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::workers::Workers;

/// Longest edge after downscaling; slides never draw larger than this
pub const MAX_IMAGE_EDGE: u32 = 1024;

const DEFAULT_CAPACITY: usize = 64;

/// What the widget can draw for an image right now
#[derive(Clone)]
pub enum ImageSlot {
    Ready(egui::TextureHandle),
    Loading,
    Missing,
}

enum Entry {
    Ready(egui::TextureHandle),
    Failed,
}

type DecodeResult = (PathBuf, Result<egui::ColorImage>);

pub struct ImageCache {
    entries: LruCache<PathBuf, Entry>,
    pending: HashSet<PathBuf>,
    tx: Sender<DecodeResult>,
    rx: Receiver<DecodeResult>,
    workers: Arc<Workers>,
}

impl ImageCache {
    pub fn new(workers: Arc<Workers>) -> Self {
        Self::with_capacity(workers, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(workers: Arc<Workers>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        let (tx, rx) = unbounded();
        Self {
            entries: LruCache::new(capacity),
            pending: HashSet::new(),
            tx,
            rx,
            workers,
        }
    }

    /// Texture for `path`, queueing a decode on first request.
    pub fn get(&mut self, path: &Path) -> ImageSlot {
        if let Some(entry) = self.entries.get(path) {
            return match entry {
                Entry::Ready(tex) => ImageSlot::Ready(tex.clone()),
                Entry::Failed => ImageSlot::Missing,
            };
        }
        if self.pending.insert(path.to_path_buf()) {
            let path = path.to_path_buf();
            let tx = self.tx.clone();
            trace!("Queue image decode: {}", path.display());
            self.workers.execute(move || {
                let result = decode_image(&path, MAX_IMAGE_EDGE);
                let _ = tx.send((path, result));
            });
        }
        ImageSlot::Loading
    }

    /// Upload finished decodes. Returns how many arrived.
    pub fn drain(&mut self, ctx: &egui::Context) -> usize {
        let mut count = 0;
        while let Ok((path, result)) = self.rx.try_recv() {
            self.pending.remove(&path);
            let entry = match result {
                Ok(image) => {
                    let name = path.to_string_lossy().to_string();
                    debug!("Image ready: {} ({}x{})", name, image.size[0], image.size[1]);
                    Entry::Ready(ctx.load_texture(name, image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    warn!("Image unavailable: {:#}", e);
                    Entry::Failed
                }
            };
            self.entries.put(path, entry);
            count += 1;
        }
        count
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Forget everything (content reload). In-flight decodes are discarded on arrival.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.pending.clear();
        let (tx, rx) = unbounded();
        self.tx = tx;
        self.rx = rx;
    }
}

/// Read bytes from a local file or an http(s) URL.
fn read_source(path: &Path) -> Result<Vec<u8>> {
    let text = path.to_string_lossy();
    if text.starts_with("http://") || text.starts_with("https://") {
        let response = reqwest::blocking::get(text.as_ref())
            .with_context(|| format!("Fetch image {}", text))?;
        if !response.status().is_success() {
            bail!("Fetch image {}: HTTP {}", text, response.status());
        }
        let bytes = response.bytes().with_context(|| format!("Read image body {}", text))?;
        return Ok(bytes.to_vec());
    }
    std::fs::read(path).with_context(|| format!("Read image {}", path.display()))
}

/// Decode and downscale so the longest edge is at most `max_edge`.
pub fn decode_image(path: &Path, max_edge: u32) -> Result<egui::ColorImage> {
    let bytes = read_source(path)?;
    let image = image::load_from_memory(&bytes)
        .with_context(|| format!("Decode image {}", path.display()))?;
    let image = if image.width() > max_edge || image.height() > max_edge {
        image.thumbnail(max_edge, max_edge)
    } else {
        image
    };
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(name: &str, w: u32, h: u32) -> PathBuf {
        let path = std::env::temp_dir().join(format!("folio_{}_{}.png", name, std::process::id()));
        RgbaImage::from_pixel(w, h, Rgba([200, 30, 30, 255])).save(&path).unwrap();
        path
    }

    #[test]
    fn test_decode_small_image() {
        let path = write_png("small", 8, 4);
        let img = decode_image(&path, MAX_IMAGE_EDGE).unwrap();
        assert_eq!(img.size, [8, 4]);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_decode_downscales() {
        let path = write_png("large", 64, 32);
        let img = decode_image(&path, 16).unwrap();
        assert_eq!(img.size, [16, 8]);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file() {
        let err = decode_image(Path::new("/nonexistent/folio/cert.png"), 64).unwrap_err();
        assert!(format!("{:#}", err).contains("Read image"));
    }

    #[test]
    fn test_cache_resolves_after_drain() {
        let ctx = egui::Context::default();
        let workers = Arc::new(Workers::new(1));
        let mut cache = ImageCache::new(Arc::clone(&workers));
        let good = write_png("cache", 4, 4);
        let bad = PathBuf::from("/nonexistent/folio/missing.png");

        assert!(matches!(cache.get(&good), ImageSlot::Loading));
        assert!(matches!(cache.get(&bad), ImageSlot::Loading));
        assert!(cache.has_pending());

        let mut arrived = 0;
        for _ in 0..200 {
            arrived += cache.drain(&ctx);
            if arrived == 2 {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert_eq!(arrived, 2);
        assert!(!cache.has_pending());
        assert!(matches!(cache.get(&good), ImageSlot::Ready(_)));
        assert!(matches!(cache.get(&bad), ImageSlot::Missing));
        let _ = std::fs::remove_file(good);
    }
}
