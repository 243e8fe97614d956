// src/render/surface.rs
//
// nannou-backed canvas. Shapes are drawn into an offscreen texture that is
// never cleared between frames, so finished shapes stay painted at their last
// color. The window view stretches that texture onto the swap chain frame.

use std::sync::Arc;

use nannou::prelude::*;

use super::Canvas;
use crate::error::SurfaceError;
use crate::models::{BoxGeometry, Color, EllipseGeometry, Point, PolygonGeometry};

const OUTLINE_WEIGHT: f32 = 1.0;

// Everything tied to one texture size. Replaced as a unit on resize.
struct SurfaceTarget {
    texture: wgpu::Texture,
    texture_view: wgpu::TextureView,
    renderer: nannou::draw::Renderer,
    reshaper: wgpu::TextureReshaper,
}

impl SurfaceTarget {
    fn build(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        sample_count: u32,
        dst_sample_count: u32,
    ) -> Self {
        let texture = wgpu::TextureBuilder::new()
            .size([width, height])
            // Drawn into by the renderer, sampled by the reshaper.
            .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
            .sample_count(sample_count)
            .format(wgpu::TextureFormat::Rgba16Float)
            .build(device);

        let renderer = nannou::draw::RendererBuilder::new()
            .build_from_texture_descriptor(device, texture.descriptor());

        let texture_view = texture.view().build();
        let reshaper = wgpu::TextureReshaper::new(
            device,
            &texture_view,
            texture.sample_count(),
            texture.sample_type(),
            dst_sample_count,
            Frame::TEXTURE_FORMAT,
        );

        Self {
            texture,
            texture_view,
            renderer,
            reshaper,
        }
    }
}

pub struct NannouSurface {
    device_queue_pair: Arc<wgpu::DeviceQueuePair>,
    draw: Draw,
    target: SurfaceTarget,
    width: u32,
    height: u32,
    sample_count: u32,
    dst_sample_count: u32,
    needs_clear: bool,
}

impl NannouSurface {
    pub fn new(
        window: &Window,
        width: u32,
        height: u32,
        sample_count: u32,
    ) -> Result<Self, SurfaceError> {
        let device_queue_pair = window.device_queue_pair().clone();
        let dst_sample_count = window.msaa_samples();
        check_size(device_queue_pair.device(), width, height)?;

        let target = SurfaceTarget::build(
            device_queue_pair.device(),
            width,
            height,
            sample_count,
            dst_sample_count,
        );

        Ok(Self {
            device_queue_pair,
            draw: Draw::new(),
            target,
            width,
            height,
            sample_count,
            dst_sample_count,
            needs_clear: true,
        })
    }

    /// Stretches the surface texture onto the window frame.
    pub fn view(&self, frame: &Frame) {
        let mut encoder = frame.command_encoder();
        self.target
            .reshaper
            .encode_render_pass(frame.texture_view(), &mut encoder);
    }

    // top-left pixel space -> nannou's centered, y-up space
    fn to_draw_space(&self, point: Point) -> Point2 {
        pt2(
            point.x as f32 - self.width as f32 / 2.0,
            self.height as f32 / 2.0 - point.y as f32,
        )
    }

    fn box_center_size(&self, geometry: &BoxGeometry) -> (Point2, Vec2) {
        let a = self.to_draw_space(geometry.top_left);
        let b = self.to_draw_space(geometry.bottom_right);
        ((a + b) / 2.0, (a - b).abs())
    }

    fn polygon_points(&self, geometry: &PolygonGeometry) -> Vec<Point2> {
        geometry
            .vertices()
            .iter()
            .map(|p| self.to_draw_space(*p))
            .collect()
    }
}

impl Canvas for NannouSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_box(&mut self, geometry: &BoxGeometry, color: Color) {
        let (center, size) = self.box_center_size(geometry);
        self.draw
            .rect()
            .xy(center)
            .wh(size)
            .color(Rgba::from(color));
    }

    fn outline_box(&mut self, geometry: &BoxGeometry, color: Color) {
        let (center, size) = self.box_center_size(geometry);
        self.draw
            .rect()
            .xy(center)
            .wh(size)
            .no_fill()
            .stroke(Rgba::from(color))
            .stroke_weight(OUTLINE_WEIGHT);
    }

    fn fill_ellipse(&mut self, geometry: &EllipseGeometry, color: Color) {
        let center = self.to_draw_space(geometry.center);
        self.draw
            .ellipse()
            .xy(center)
            .w_h(geometry.radius_x as f32 * 2.0, geometry.radius_y as f32 * 2.0)
            .color(Rgba::from(color));
    }

    fn outline_ellipse(&mut self, geometry: &EllipseGeometry, color: Color) {
        let center = self.to_draw_space(geometry.center);
        self.draw
            .ellipse()
            .xy(center)
            .w_h(geometry.radius_x as f32 * 2.0, geometry.radius_y as f32 * 2.0)
            .no_fill()
            .stroke(Rgba::from(color))
            .stroke_weight(OUTLINE_WEIGHT);
    }

    fn fill_polygon(&mut self, geometry: &PolygonGeometry, color: Color) {
        let points = self.polygon_points(geometry);
        self.draw.polygon().color(Rgba::from(color)).points(points);
    }

    fn outline_polygon(&mut self, geometry: &PolygonGeometry, color: Color) {
        let points = self.polygon_points(geometry);
        self.draw
            .polyline()
            .weight(OUTLINE_WEIGHT)
            .color(Rgba::from(color))
            .points_closed(points);
    }

    fn present(&mut self) {
        if self.needs_clear {
            self.draw.background().color(BLACK);
            self.needs_clear = false;
        }

        let device = self.device_queue_pair.device();
        let ce_desc = wgpu::CommandEncoderDescriptor {
            label: Some("Surface renderer"),
        };
        let mut encoder = device.create_command_encoder(&ce_desc);

        self.target.renderer.encode_render_pass(
            device,
            &mut encoder,
            &self.draw,
            1.0,
            self.target.texture.size(),
            &self.target.texture_view,
            None,
        );
        self.device_queue_pair.queue().submit(Some(encoder.finish()));
        self.draw.reset();
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        let device = self.device_queue_pair.device();
        check_size(device, width, height)?;

        let target = SurfaceTarget::build(
            device,
            width,
            height,
            self.sample_count,
            self.dst_sample_count,
        );
        // old target is dropped only now that the new one exists
        self.target = target;
        self.width = width;
        self.height = height;
        self.needs_clear = true;
        Ok(())
    }
}

fn check_size(device: &wgpu::Device, width: u32, height: u32) -> Result<(), SurfaceError> {
    let max = device.limits().max_texture_dimension_2d;
    if width == 0 || height == 0 || width > max || height > max {
        return Err(SurfaceError::InvalidSize { width, height, max });
    }
    Ok(())
}
