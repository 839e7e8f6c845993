//! Benchmarks for zipguard-core extraction.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use zipguard_core::extract_archive;
use zipguard_core::test_utils::ZipTestBuilder;
use zipguard_core::types::DestDir;
use zipguard_core::types::EntryPath;

/// Writes archive bytes next to the extraction directories of one benchmark.
fn stage_archive(temp: &TempDir, data: &[u8]) -> PathBuf {
    let path = temp.path().join("bench.zip");
    fs::write(&path, data).unwrap();
    path
}

fn create_many_small_files_zip(file_count: usize) -> Vec<u8> {
    (0..file_count)
        .fold(ZipTestBuilder::new(), |builder, i| {
            builder.add_file(&format!("file{i:04}.txt"), format!("content{i}").as_bytes())
        })
        .build()
}

fn create_nested_dirs_zip(depth: usize, files_per_dir: usize) -> Vec<u8> {
    let mut builder = ZipTestBuilder::new();
    let mut prefix = String::new();
    for _ in 0..depth {
        builder = builder.add_directory(&format!("{prefix}subdir/"));
        for i in 0..files_per_dir {
            builder = builder.add_file(&format!("{prefix}file{i}.txt"), b"content");
        }
        prefix.push_str("subdir/");
    }
    builder.build()
}

fn benchmark_entry_path_resolution(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let dest = DestDir::new(temp.path()).unwrap();

    let mut group = c.benchmark_group("entry_path_resolution");
    for name in ["file.txt", "a/b/c/d/e/f/g/file.txt", "a/./b/../c/file.txt", "../evil.txt"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| EntryPath::resolve(&dest, name));
        });
    }
    group.finish();
}

fn benchmark_many_small_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_small_files");

    for file_count in [100, 1000] {
        let temp = TempDir::new().unwrap();
        let archive = stage_archive(&temp, &create_many_small_files_zip(file_count));
        group.throughput(Throughput::Elements(file_count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            &archive,
            |b, archive| {
                b.iter(|| {
                    let out = TempDir::new().unwrap();
                    extract_archive(archive, out.path()).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn benchmark_large_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_files");

    for size_mb in [1, 10] {
        let size_bytes = size_mb * 1024 * 1024;
        let temp = TempDir::new().unwrap();
        let data = ZipTestBuilder::new()
            .add_file("large_file.bin", &vec![0xAB_u8; size_bytes])
            .build();
        let archive = stage_archive(&temp, &data);
        group.throughput(Throughput::Bytes(size_bytes as u64));

        group.bench_with_input(BenchmarkId::new("size_mb", size_mb), &archive, |b, archive| {
            b.iter(|| {
                let out = TempDir::new().unwrap();
                extract_archive(archive, out.path()).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_nested_directories(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_directories");

    for depth in [5, 20] {
        let temp = TempDir::new().unwrap();
        let archive = stage_archive(&temp, &create_nested_dirs_zip(depth, 2));
        group.throughput(Throughput::Elements(depth as u64 * 3));

        group.bench_with_input(BenchmarkId::from_parameter(depth), &archive, |b, archive| {
            b.iter(|| {
                let out = TempDir::new().unwrap();
                extract_archive(archive, out.path()).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_deflate(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_methods");

    let size_bytes = 10 * 1024 * 1024;
    group.throughput(Throughput::Bytes(size_bytes as u64));

    let temp = TempDir::new().unwrap();
    let data = ZipTestBuilder::new()
        .add_deflated_file("compressed.bin", &vec![0u8; size_bytes])
        .build();
    let archive = stage_archive(&temp, &data);

    group.bench_with_input(BenchmarkId::new("method", "deflate"), &archive, |b, archive| {
        b.iter(|| {
            let out = TempDir::new().unwrap();
            extract_archive(archive, out.path()).unwrap();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_entry_path_resolution,
    benchmark_many_small_files,
    benchmark_large_files,
    benchmark_nested_directories,
    benchmark_deflate
);
criterion_main!(benches);
