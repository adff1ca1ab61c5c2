use crate::animation::AnimationCycle;
use sdl2::rect::Rect;

/// Horizontal speed of every live obstacle, normal mode.
pub const OBSTACLE_SPEED: i32 = 4;
/// Horizontal speed once the fast spawn timer has broadcast a speed-up.
pub const OBSTACLE_SPEED_FAST: i32 = 12;
/// Obstacles are removed once their left edge crosses this line.
pub const DESPAWN_X: i32 = -100;

const ANIMATION_STEP: f32 = 0.1;

/// Closed set of obstacle archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Bird,
    Tree1,
    Tree2,
    Tree3,
    Mushroom,
}

/// Static per-archetype data: sprite frames, visual size, and the ground
/// line the sprite's bottom edge sits on. Resolved through [`ObstacleKind::descriptor`]
/// instead of branching on the kind at every use site.
pub struct ObstacleDescriptor {
    pub frame_paths: &'static [&'static str],
    pub width: u32,
    pub height: u32,
    pub bottom_y: i32,
}

const TREE_BOTTOM_Y: i32 = 500;

const BIRD: ObstacleDescriptor = ObstacleDescriptor {
    frame_paths: &[
        "environment/obstacles/Bird/Vogel1.png",
        "environment/obstacles/Bird/Vogel2.png",
        "environment/obstacles/Bird/Vogel3.png",
    ],
    width: 90,
    height: 66,
    bottom_y: 350,
};

const TREE_1: ObstacleDescriptor = ObstacleDescriptor {
    frame_paths: &["environment/obstacles/Tree_1.png"],
    width: 74,
    height: 118,
    bottom_y: TREE_BOTTOM_Y,
};

const TREE_2: ObstacleDescriptor = ObstacleDescriptor {
    frame_paths: &["environment/obstacles/Tree_2.png"],
    width: 86,
    height: 122,
    bottom_y: TREE_BOTTOM_Y,
};

const TREE_3: ObstacleDescriptor = ObstacleDescriptor {
    frame_paths: &["environment/obstacles/Tree_3.png"],
    width: 64,
    height: 98,
    bottom_y: TREE_BOTTOM_Y,
};

const MUSHROOM: ObstacleDescriptor = ObstacleDescriptor {
    frame_paths: &["environment/obstacles/Mushroom_2.png"],
    width: 72,
    height: 64,
    bottom_y: TREE_BOTTOM_Y,
};

impl ObstacleKind {
    pub fn all() -> [ObstacleKind; 5] {
        [
            ObstacleKind::Bird,
            ObstacleKind::Tree1,
            ObstacleKind::Tree2,
            ObstacleKind::Tree3,
            ObstacleKind::Mushroom,
        ]
    }

    pub fn descriptor(self) -> &'static ObstacleDescriptor {
        match self {
            ObstacleKind::Bird => &BIRD,
            ObstacleKind::Tree1 => &TREE_1,
            ObstacleKind::Tree2 => &TREE_2,
            ObstacleKind::Tree3 => &TREE_3,
            ObstacleKind::Mushroom => &MUSHROOM,
        }
    }
}

/// A live obstacle drifting left at the collection-wide speed.
pub struct Obstacle {
    pub kind: ObstacleKind,
    cycle: AnimationCycle,
    x: i32,
    speed: i32,
}

impl Obstacle {
    /// Places the obstacle with its midbottom anchor at `center_x` on the
    /// archetype's ground line.
    pub fn new(kind: ObstacleKind, center_x: i32) -> Self {
        let descriptor = kind.descriptor();
        Obstacle {
            kind,
            cycle: AnimationCycle::new(descriptor.frame_paths.len()),
            x: center_x - descriptor.width as i32 / 2,
            speed: OBSTACLE_SPEED,
        }
    }

    /// One tick: advance the animation cursor, then drift left.
    pub fn update(&mut self) {
        self.cycle.advance(ANIMATION_STEP);
        self.x -= self.speed;
    }

    pub fn is_offscreen(&self) -> bool {
        self.x <= DESPAWN_X
    }

    pub fn frame(&self) -> usize {
        self.cycle.frame()
    }

    pub fn rect(&self) -> Rect {
        let descriptor = self.kind.descriptor();
        Rect::new(
            self.x,
            descriptor.bottom_y - descriptor.height as i32,
            descriptor.width,
            descriptor.height,
        )
    }

    #[allow(dead_code)]
    pub fn speed(&self) -> i32 {
        self.speed
    }
}

/// Broadcast speed-up across the whole live collection. Re-applying to an
/// already sped-up obstacle is a no-op in effect.
pub fn speed_up_all(obstacles: &mut [Obstacle]) {
    for obstacle in obstacles {
        obstacle.speed = OBSTACLE_SPEED_FAST;
    }
}

/// Broadcast reset back to the baseline speed. The game-flow reset clears
/// the collection outright, so this only matters for obstacles kept alive
/// across a speed change.
#[allow(dead_code)]
pub fn reset_speed_all(obstacles: &mut [Obstacle]) {
    for obstacle in obstacles {
        obstacle.speed = OBSTACLE_SPEED;
    }
}
