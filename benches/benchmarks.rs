//! Performance benchmarks for scopemap

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scopemap::fs::MemoryFileSystem;
use scopemap::graph::{BuiltinSource, GraphSource, extract_specifiers};
use scopemap::output::render_tree;
use scopemap::{ForwardGraph, GraphConfig, StructureConfig, StructureWalker, build_reverse, rank_impact};

const PAGE_SOURCE: &str = r#"'use client';

import React, { useState } from 'react';
import { z } from 'zod';
import { Button } from '@/components/ui/button';
import { Card, CardContent } from '@/components/ui/card';
import { cn } from '../lib/utils';
import type { User } from './types';
import {
  validateEmail,
  validatePassword,
} from '@/lib/validation';

export default function Page() {
  const [user, setUser] = useState<User | null>(null);
  return null;
}
"#;

/// Build an in-memory project with `file_count` modules, each importing the
/// shared utilities and its predecessor.
fn create_project(file_count: usize) -> MemoryFileSystem {
    let mut fs = MemoryFileSystem::new()
        .with_file("lib/utils.ts", "export const cn = () => '';\n")
        .with_file("lib/validation.ts", "export const validateEmail = () => true;\n");

    for i in 0..file_count {
        let mut content = String::from("import { cn } from '@/lib/utils';\n");
        if i > 0 {
            let prev = i - 1;
            content.push_str(&format!(
                "import {{ prev }} from '../group_{}/module_{}';\n",
                prev % 10,
                prev
            ));
        }
        fs.add_file(&format!("components/group_{}/module_{}.tsx", i % 10, i), &content);
    }

    fs
}

fn bench_extract_specifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_specifiers");

    group.bench_function("page", |b| {
        b.iter(|| extract_specifiers(black_box(PAGE_SOURCE), "@/"))
    });

    let large = PAGE_SOURCE.repeat(50);
    group.bench_function("page_x50", |b| {
        b.iter(|| extract_specifiers(black_box(&large), "@/"))
    });

    group.finish();
}

fn bench_builtin_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("builtin_source");

    for (label, count) in [("small_50_files", 50), ("medium_500_files", 500)] {
        let fs = create_project(count);

        let sequential = GraphConfig {
            jobs: 1,
            ..Default::default()
        };
        group.bench_function(format!("{}_sequential", label), |b| {
            b.iter(|| BuiltinSource::new(&fs, &sequential).forward_graph())
        });

        let parallel = GraphConfig::default();
        group.bench_function(format!("{}_parallel", label), |b| {
            b.iter(|| BuiltinSource::new(&fs, &parallel).forward_graph())
        });
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let mut forward = ForwardGraph::new();
    for i in 0..2000 {
        let file = format!("app/page_{}.tsx", i);
        forward.push(&file, format!("lib/shared_{}.ts", i % 50));
        forward.push(&file, "lib/utils.ts");
    }

    let mut group = c.benchmark_group("ranking");
    group.bench_function("build_reverse_2000_files", |b| {
        b.iter(|| build_reverse(black_box(&forward)))
    });

    let reverse = build_reverse(&forward);
    group.bench_function("rank_impact_2000_files", |b| {
        b.iter(|| rank_impact(black_box(&reverse), 20, 5))
    });
    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let fs = create_project(500);
    let walker = StructureWalker::new(StructureConfig::default());

    c.bench_function("structure_walk_and_render_500_files", |b| {
        b.iter(|| render_tree(&walker.walk(black_box(&fs))))
    });
}

criterion_group!(
    benches,
    bench_extract_specifiers,
    bench_builtin_source,
    bench_ranking,
    bench_structure,
);
criterion_main!(benches);
