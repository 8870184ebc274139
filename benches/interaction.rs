// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for pointer interaction throughput.
//!
//! Measures the cost of feeding pointer-move events through the editor for:
//! - An element move drag
//! - A crop handle drag
//! - A hand-tool pan

use criterion::{criterion_group, criterion_main, Criterion};
use iced_core::{mouse, Point};
use photo_canvas::domain::media::RawImage;
use photo_canvas::editor::{
    ElementKind, ElementMessage, ElementPatch, Message, SidebarMessage, State, ToolbarMessage,
};
use std::hint::black_box;

const MOVES: usize = 200;

fn loaded_state() -> State {
    let mut state = State::default();
    let pixels = vec![128; 1600 * 1200 * 4];
    state.update(Message::LoadImage(RawImage::from_rgba(1600, 1200, pixels)));
    state
}

fn pointer(state: &mut State, event: mouse::Event) {
    state.update(Message::RawEvent(iced_core::Event::Mouse(event)));
}

fn drag_loop(state: &mut State, start: Point) {
    pointer(state, mouse::Event::CursorMoved { position: start });
    pointer(state, mouse::Event::ButtonPressed(mouse::Button::Left));
    for step in 0..MOVES {
        #[allow(clippy::cast_precision_loss)]
        let offset = (step % 50) as f32;
        pointer(
            state,
            mouse::Event::CursorMoved {
                position: Point::new(start.x - offset, start.y - offset),
            },
        );
    }
    pointer(state, mouse::Event::ButtonReleased(mouse::Button::Left));
}

fn bench_element_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction");
    let mut state = loaded_state();
    for index in 0..50 {
        #[allow(clippy::cast_precision_loss)]
        let offset = (index * 10) as f32;
        state.update(
            ElementMessage::Add {
                kind: ElementKind::Shape,
                content: "square".to_string(),
                overrides: ElementPatch::position(offset, offset),
            }
            .into(),
        );
    }

    group.bench_function("element_move_drag", |b| {
        b.iter(|| {
            drag_loop(&mut state, Point::new(550.0, 550.0));
            black_box(state.elements().len());
        });
    });

    group.finish();
}

fn bench_crop_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction");
    let mut state = loaded_state();
    state.update(SidebarMessage::StartCrop.into());

    group.bench_function("crop_handle_drag", |b| {
        b.iter(|| {
            drag_loop(&mut state, Point::new(1600.0, 1200.0));
            black_box(state.crop().rect());
        });
    });

    group.finish();
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction");
    let mut state = loaded_state();
    state.update(ToolbarMessage::ToggleHandTool.into());

    group.bench_function("hand_tool_pan", |b| {
        b.iter(|| {
            drag_loop(&mut state, Point::new(400.0, 400.0));
            black_box(state.viewport().pan);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_element_drag, bench_crop_drag, bench_pan);
criterion_main!(benches);
