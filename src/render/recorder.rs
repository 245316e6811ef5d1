use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{Error, Result},
    math::color::Color,
    render::{
        canvas::{Canvas, ImageFormat},
        display::DisplaySurface,
    },
};

enum FrameSink {
    Gif(gif::Encoder<BufWriter<File>>),
    Images {
        directory: PathBuf,
        format: ImageFormat,
    },
}

/// Display surface that stores every presented frame,
/// either as one animated gif or as numbered image files.
pub struct FrameRecorder {
    canvas: Canvas,
    sink: FrameSink,
    frame_delay: u16,
    frames_presented: usize,
}

impl FrameRecorder {
    /// In hundredths of a second
    pub const DEFAULT_FRAME_DELAY: u16 = 4;

    fn check_size(width: usize, height: usize) -> Result<()> {
        let max = u16::MAX as usize;
        if width > max || height > max {
            return Err(Error::FrameTooLarge { width, height, max });
        }
        Ok(())
    }

    /// Animated, endlessly looping gif at `path`
    pub fn gif(path: impl AsRef<Path>, width: usize, height: usize) -> Result<Self> {
        Self::check_size(width, height)?;
        let file = BufWriter::new(File::create(path)?);
        let mut encoder = gif::Encoder::new(file, width as u16, height as u16, &[])?;
        encoder.set_repeat(gif::Repeat::Infinite)?;

        Ok(Self {
            canvas: Canvas::new(width, height),
            sink: FrameSink::Gif(encoder),
            frame_delay: Self::DEFAULT_FRAME_DELAY,
            frames_presented: 0,
        })
    }

    /// One `frame_NNNN` file per presented frame inside `directory`, which is created if missing
    pub fn images(
        directory: impl AsRef<Path>,
        width: usize,
        height: usize,
        format: ImageFormat,
    ) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory)?;

        Ok(Self {
            canvas: Canvas::new(width, height),
            sink: FrameSink::Images { directory, format },
            frame_delay: Self::DEFAULT_FRAME_DELAY,
            frames_presented: 0,
        })
    }

    pub fn set_frame_delay(&mut self, hundredths: u16) {
        self.frame_delay = hundredths;
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn frame_path(directory: &Path, index: usize, format: ImageFormat) -> PathBuf {
        directory.join(format!("frame_{index:04}.{format}"))
    }
}

impl DisplaySurface for FrameRecorder {
    fn width(&self) -> usize {
        self.canvas.width()
    }

    fn height(&self) -> usize {
        self.canvas.height()
    }

    fn pixel(&self, x: usize, y: usize) -> Color {
        self.canvas.pixel(x, y)
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.canvas.set_pixel(x, y, color);
    }

    fn present(&mut self) -> Result<()> {
        match &mut self.sink {
            FrameSink::Gif(encoder) => {
                let mut frame = gif::Frame::from(&self.canvas);
                frame.delay = self.frame_delay;
                encoder.write_frame(&frame)?;
                debug!("appended gif frame {}", self.frames_presented);
            }
            FrameSink::Images { directory, format } => {
                let path = Self::frame_path(directory, self.frames_presented, *format);
                self.canvas.save(BufWriter::new(File::create(&path)?), *format)?;
                debug!("saved frame to {}", path.display());
            }
        }
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("raycaster-{name}-{}", std::process::id()))
    }

    #[test]
    fn frame_path() {
        assert_eq!(
            FrameRecorder::frame_path(Path::new("out"), 7, ImageFormat::Png),
            Path::new("out").join("frame_0007.png")
        );
    }

    #[test]
    fn writes_numbered_images() -> Result<()> {
        let directory = scratch_dir("images");
        let mut recorder = FrameRecorder::images(&directory, 3, 2, ImageFormat::Ppm)?;

        recorder.set_pixel(1, 1, Color::white());
        recorder.present()?;
        recorder.present()?;

        assert_eq!(recorder.frames_presented(), 2);
        let first = fs::read_to_string(directory.join("frame_0000.ppm"))?;
        assert!(first.starts_with("P3\n3 2\n255\n"));
        assert!(directory.join("frame_0001.ppm").exists());

        fs::remove_dir_all(directory)?;
        Ok(())
    }

    #[test]
    fn writes_gif() -> Result<()> {
        let directory = scratch_dir("gif");
        fs::create_dir_all(&directory)?;
        let path = directory.join("animation.gif");

        {
            let mut recorder = FrameRecorder::gif(&path, 4, 4)?;
            recorder.set_pixel(0, 0, Color::red());
            recorder.present()?;
            recorder.present()?;
        }

        let bytes = fs::read(&path)?;
        assert_eq!(&bytes[..6], b"GIF89a");

        fs::remove_dir_all(directory)?;
        Ok(())
    }

    #[test]
    fn rejects_oversized_gif() {
        let path = scratch_dir("oversized").with_extension("gif");
        let result = FrameRecorder::gif(&path, 70_000, 10);
        assert!(matches!(result, Err(Error::FrameTooLarge { width: 70_000, .. })));
    }
}
