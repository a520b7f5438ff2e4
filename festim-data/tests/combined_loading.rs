use festim_core::ndarray::{ArrayD, IxDyn};
use festim_core::util::get_batch_size;
use festim_core::{Record, Value};
use festim_data::{CombinedDataset, DataLoader, Dataset, SequentialSampler, VecDataset};

fn image_record(side: usize, label: f64) -> Record {
    [
        ("x".to_string(), Value::Array(ArrayD::from_elem(IxDyn(&[side, side]), 1.0))),
        ("y".to_string(), Value::Scalar(label)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn combined_sources_load_as_padded_batches() {
    let small = VecDataset::new(vec![image_record(2, 0.0), image_record(2, 1.0)]);
    let large = VecDataset::new(vec![image_record(3, 2.0), image_record(3, 3.0), image_record(3, 4.0)]);
    let combined = CombinedDataset::new(vec![small, large]).unwrap();
    assert_eq!(combined.len(), 5);

    let loader = DataLoader::new(combined, 4, SequentialSampler::new(), false).with_padding(-1.0);
    let batches: Vec<Record> = loader.collect::<Result<_, _>>().unwrap();
    assert_eq!(batches.len(), 2);

    let first = &batches[0];
    assert_eq!(get_batch_size(first).unwrap(), 4);
    assert_eq!(first["x"].shape(), Some(vec![4, 3, 3]));
    let x = first["x"].as_array().unwrap();
    // the 2x2 records were padded on the trailing row and column
    assert_eq!(x[[0, 2, 2]], -1.0);
    assert_eq!(x[[2, 2, 2]], 1.0);

    assert_eq!(get_batch_size(&batches[1]).unwrap(), 1);
}
