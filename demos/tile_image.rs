//! Tiles a synthetic RGBA image and prints each block's content id.
//!
//! Run with:
//!     cargo run --example tile_image

use imgsplit::{ImageSplitter, SplitConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (width, height, channels) = (256usize, 128usize, 4usize);

    // Horizontal gradient, one byte per channel
    let mut image = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            image.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8, 0xFF]);
        }
    }

    let config = SplitConfig::for_tiles(width, height, channels, 64, 64)?;
    let splitter = ImageSplitter::new(&image, config)?;

    println!(
        "Split {} bytes into {} blocks\n",
        splitter.image_size(),
        splitter.part_count()
    );

    for block in &splitter {
        println!(
            "Block {}: {}x{}, {} bytes, cid={}",
            block.index,
            block.width,
            block.height,
            block.len(),
            &block.cid.to_hex()[..16]
        );
    }

    // Content-addressed lookup
    let wanted = splitter.part_cid(splitter.part_count() - 1)?;
    println!("\nLast block found at index {}", splitter.index_for_cid(&wanted)?);

    Ok(())
}
