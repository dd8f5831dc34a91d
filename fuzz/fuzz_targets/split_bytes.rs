#![no_main]

use imgsplit::{ImageSplitter, SplitConfig, SplitError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, u8, u8, u8, Vec<u8>)| {
    let (stride, line, rows, channels, data) = input;
    let block_stride = stride as usize;
    let block_length = block_stride * rows as usize;

    let config = match SplitConfig::new(block_stride, line as usize, block_length, channels as usize)
    {
        Ok(config) => config,
        Err(SplitError::InvalidGeometry { .. }) => return,
        Err(e) => panic!("unexpected config error: {e}"),
    };

    // Any geometry either splits or is rejected; it never panics.
    let splitter = match ImageSplitter::new(&data, config) {
        Ok(splitter) => splitter,
        Err(SplitError::InvalidGeometry { .. }) => return,
        Err(e) => panic!("unexpected split error: {e}"),
    };

    assert_eq!(splitter.part_count(), data.len() / block_length);
    let total: usize = splitter.iter().map(|b| b.len()).sum();
    assert_eq!(total, data.len());
    assert!(splitter.verify_all().is_empty());

    // Without padding, blocks are the input slices in order.
    if line == 0 {
        for (block, slice) in splitter.iter().zip(data.chunks(block_length)) {
            assert_eq!(block.data.as_ref(), slice);
        }
    }

    for k in 0..splitter.part_count() {
        let cid = splitter.part_cid(k).unwrap();
        let first = splitter.index_for_cid(&cid).unwrap();
        assert!(first <= k);
        assert_eq!(splitter.part(first).unwrap(), splitter.part(k).unwrap());
    }
});
