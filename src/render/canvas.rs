use std::{fmt::Display, io::Write};

use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::{error::Result, math::color::Color, render::display::DisplaySurface};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// In memory display surface
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; height * width],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::black())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside of {}x{} canvas",
            self.width,
            self.height
        );
        self.width * y + x
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Computes every pixel in parallel, in no particular order
    pub fn set_each_pixel<F>(&mut self, fun: F, progressbar: indicatif::ProgressBar)
    where
        F: Fn(usize, usize) -> Color + std::marker::Sync,
    {
        let width = self.width;

        self.pixels
            .par_iter_mut()
            .enumerate()
            .progress_with(progressbar)
            .for_each(|(id, pixel_color)| {
                let x = id % width;
                let y = id / width;
                *pixel_color = fun(x, y);
            })
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.as_scaled_values())
            .collect()
    }

    /// Row major `0xAARRGGBB` pixels
    pub fn as_argb(&self) -> Vec<u32> {
        self.pixels.iter().map(Color::as_argb).collect()
    }
}

impl DisplaySurface for Canvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let id = self.index(x, y);
        self.pixels[id] = color;
    }

    /// Nothing to publish, the pixels are read directly
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

impl From<&Canvas> for gif::Frame<'_> {
    fn from(canvas: &Canvas) -> Self {
        gif::Frame::from_rgb(
            canvas.width as u16,
            canvas.height as u16,
            &canvas.as_u8_rgb(),
        )
    }
}

/// saving image in ppm format
impl Canvas {
    const MAX_LINE_LEN: usize = 70;
    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    fn ppm_data(&self) -> String {
        let mut line_len = 0;

        self.pixels
            .iter()
            .enumerate()
            .map(|(id, color)| {
                color
                    .as_scaled_values()
                    .into_iter()
                    .enumerate()
                    .map(|(j, val)| {
                        let val_str = val.to_string();
                        let sep = if (id % self.width == 0 && j == 0)
                            || line_len + val_str.len() + 1 > Self::MAX_LINE_LEN
                        {
                            line_len = 0;
                            '\n'
                        } else {
                            ' '
                        };

                        line_len += val_str.len() + 1;
                        if id == 0 && j == 0 {
                            val_str
                        } else if id == self.width * self.height - 1 && j == 2 {
                            format!("{}{}\n", sep, val_str)
                        } else {
                            format!("{}{}", sep, val_str)
                        }
                    })
                    .collect::<String>()
            })
            .collect::<String>()
    }

    pub fn save(&self, writer: impl Write, format: ImageFormat) -> Result<()> {
        match format {
            ImageFormat::Ppm => self.save_to_ppm(writer),
            ImageFormat::Png => self.save_to_png(writer),
        }
    }

    pub fn save_to_ppm(&self, mut writer: impl Write) -> Result<()> {
        writer.write_all(self.ppm_header().as_bytes())?;
        writer.write_all(self.ppm_data().as_bytes())?;
        Ok(())
    }
}

/// saving image in png format
impl Canvas {
    pub fn save_to_png(&self, writer: impl Write) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.as_u8_rgb())?;
        writer.finish()?;
        Ok(())
    }
}
