use crate::{
    error::{GifweaveError, Result},
    palette::Plan9Palette,
    types::{
        output_guard::OutputGuard,
        sequence::{FrameSequence, IndexedFrame},
    },
};
use gif::{Encoder, EncodingError, Frame, Repeat};
use image::{ImageReader, imageops};
use std::{
    borrow::Cow,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

pub const DEFAULT_DELAY: u16 = 25;

/// Run-wide settings shared by every frame.
#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    /// Delay between frames, in 100ths of a second.
    pub delay: u16,
    pub repeat: Repeat,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            repeat: Repeat::Infinite,
        }
    }
}

/// Decodes `files` in order and writes them as one animated GIF to `output`.
///
/// Returns the number of frames written. The output file is only created
/// once every input decoded, and is removed again if encoding fails.
pub fn encode_gif(files: &[PathBuf], output: &Path, options: &EncodeOptions) -> Result<usize> {
    if files.is_empty() {
        return Err(GifweaveError::Empty);
    }

    let palette = Plan9Palette::new();
    let sequence = build_sequence(files, &palette, options.delay)?;
    write_gif(&sequence, &palette, options.repeat, output)?;

    log::info!("Wrote {} frame(s) to {:?}", sequence.len(), output);
    Ok(sequence.len())
}

pub fn build_sequence(
    files: &[PathBuf],
    palette: &Plan9Palette,
    delay: u16,
) -> Result<FrameSequence> {
    let mut sequence = FrameSequence::with_capacity(files.len());
    for path in files {
        let frame = decode_frame(path, palette)?;
        log::debug!(
            "Quantized {:?} ({}x{})",
            frame.source,
            frame.width(),
            frame.height()
        );
        sequence.push(frame, delay);
    }
    Ok(sequence)
}

/// Decodes one image and dithers it onto the palette, anchored at its own origin.
pub fn decode_frame(path: &Path, palette: &Plan9Palette) -> Result<IndexedFrame> {
    let open_err = |source| GifweaveError::Open {
        path: path.to_path_buf(),
        source,
    };

    // The reader is dropped at the end of this block, closing the file.
    let decoded = {
        let reader = BufReader::new(File::open(path).map_err(open_err)?);
        ImageReader::new(reader)
            .with_guessed_format()
            .map_err(open_err)?
            .decode()
            .map_err(|source| GifweaveError::Decode {
                path: path.to_path_buf(),
                source,
            })?
    };

    let (width, height) = (decoded.width(), decoded.height());
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(GifweaveError::TooLarge {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    let mut rgb = decoded.into_rgb8();
    imageops::dither(&mut rgb, palette);
    let indices = imageops::index_colors(&rgb, palette);

    Ok(IndexedFrame {
        source: path.to_path_buf(),
        indices,
    })
}

/// Writes the whole sequence to `output` in a single pass.
pub fn write_gif(
    sequence: &FrameSequence,
    palette: &Plan9Palette,
    repeat: Repeat,
    output: &Path,
) -> Result<()> {
    if sequence.is_empty() {
        return Err(GifweaveError::Empty);
    }

    let file = File::create(output).map_err(|source| GifweaveError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let guard = OutputGuard::new(output.to_path_buf());

    encode_frames(BufWriter::new(file), sequence, palette, repeat).map_err(|source| {
        GifweaveError::Encode {
            path: output.to_path_buf(),
            source,
        }
    })?;

    guard.commit();
    Ok(())
}

fn encode_frames<W: Write>(
    writer: W,
    sequence: &FrameSequence,
    palette: &Plan9Palette,
    repeat: Repeat,
) -> std::result::Result<(), EncodingError> {
    // Every frame was bounds-checked against u16 when decoded.
    let (width, height) = sequence.screen_size();
    let mut encoder = Encoder::new(writer, width as u16, height as u16, &palette.to_rgb_table())?;
    encoder.set_repeat(repeat)?;

    for (frame, delay) in sequence.iter() {
        encoder.write_frame(&Frame {
            width: frame.width() as u16,
            height: frame.height() as u16,
            delay,
            buffer: Cow::Borrowed(frame.indices.as_raw()),
            ..Frame::default()
        })?;
    }

    let mut writer = encoder.into_inner()?;
    writer.flush()?;
    Ok(())
}
